//! Fixed-size worker pool for multi-file runs, backed by `rayon::ThreadPool`.
//!
//! Each file is an independent job: the codec keeps no state between calls,
//! so jobs share nothing but the read-only [`Prefs`](crate::io::Prefs).

use std::io;

use rayon::prelude::*;
use rayon::ThreadPool as RayonPool;

/// Worker pool handle.
pub struct TPool {
    pool: RayonPool,
    nb_threads: usize,
}

impl TPool {
    /// Build a pool of `nb_threads` workers (must be ≥ 1).
    pub fn new(nb_threads: usize) -> io::Result<Self> {
        if nb_threads < 1 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "thread pool needs at least one worker",
            ));
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(nb_threads)
            .thread_name(|i| format!("crtf-worker-{}", i))
            .build()
            .map_err(io::Error::other)?;
        Ok(TPool { pool, nb_threads })
    }

    pub fn nb_threads(&self) -> usize {
        self.nb_threads
    }

    /// Run `job` over every item on the pool; results come back in input order.
    pub fn map<T, R, F>(&self, items: &[T], job: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        self.pool.install(|| items.par_iter().map(|item| job(item)).collect())
    }
}
