//! File-level compression: read a source, wrap it in a container, write it out.
//!
//! Public API:
//! - [`compress_filename`]: one source/destination pair
//! - [`compress_multiple_filenames`]: a list of sources, each written to
//!   `<src><suffix>`, run on a [`TPool`] when more than one worker is allowed

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::displaylevel;
use crate::frame::encode;
use crate::io::file_io::{open_dst_file, read_src_file, NUL_MARK, STDIN_MARK, STDOUT_MARK};
use crate::io::prefs::Prefs;
use crate::threadpool::TPool;
use crate::util::copy_file_mtime;

/// Byte counts for one compressed file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompressStats {
    pub bytes_read: u64,
    pub bytes_written: u64,
}

impl CompressStats {
    /// Output size as a percentage of input size.
    pub fn ratio_percent(&self) -> f64 {
        if self.bytes_read == 0 {
            return 0.0;
        }
        self.bytes_written as f64 / self.bytes_read as f64 * 100.0
    }
}

/// Compress `src` into `dst`.
///
/// Either side may be a sentinel (`stdin`, `stdout`, the null device). Regular
/// destinations receive the source's modification time; with `--rm` the
/// source is deleted once the destination is complete.
pub fn compress_filename(src: &str, dst: &str, prefs: &Prefs) -> io::Result<CompressStats> {
    let data = read_src_file(src)?;
    let container = encode(&data, prefs.use_compression);

    let mut out = open_dst_file(dst, prefs)?;
    out.write_all(&container)?;
    out.flush()?;
    drop(out);

    let stats = CompressStats {
        bytes_read: data.len() as u64,
        bytes_written: container.len() as u64,
    };

    finish_file(src, dst, prefs)?;

    displaylevel!(
        2,
        "{:<30.30} : {} bytes into {} bytes ==> {:.2}% \n",
        src,
        stats.bytes_read,
        stats.bytes_written,
        stats.ratio_percent()
    );
    Ok(stats)
}

/// Compress every file in `srcs` into `<src><suffix>`.
///
/// When `suffix` is the stdout or null-device sentinel every container goes
/// there instead, in input order. Returns the number of files that failed.
pub fn compress_multiple_filenames(srcs: &[&str], suffix: &str, prefs: &Prefs) -> io::Result<usize> {
    let to_special = suffix == STDOUT_MARK || suffix == NUL_MARK;

    let results: Vec<io::Result<CompressStats>> = if to_special || prefs.nb_workers <= 1 {
        srcs.iter()
            .map(|&src| compress_one(src, suffix, to_special, prefs))
            .collect()
    } else {
        let pool = TPool::new(prefs.nb_workers.min(srcs.len().max(1)))?;
        displaylevel!(3, "Using {} threads for compression \n", pool.nb_threads());
        pool.map(srcs, |&src| compress_one(src, suffix, false, prefs))
    };

    let mut missed = 0usize;
    let mut total = CompressStats::default();
    for (src, result) in srcs.iter().zip(results) {
        match result {
            Ok(s) => {
                total.bytes_read += s.bytes_read;
                total.bytes_written += s.bytes_written;
            }
            Err(e) => {
                displaylevel!(1, "crtf: {}: {}\n", src, e);
                missed += 1;
            }
        }
    }

    displaylevel!(
        3,
        "{} files compressed : {} bytes into {} bytes ==> {:.2}% \n",
        srcs.len() - missed,
        total.bytes_read,
        total.bytes_written,
        total.ratio_percent()
    );
    Ok(missed)
}

fn compress_one(src: &str, suffix: &str, to_special: bool, prefs: &Prefs) -> io::Result<CompressStats> {
    if to_special {
        compress_filename(src, suffix, prefs)
    } else {
        compress_filename(src, &format!("{}{}", src, suffix), prefs)
    }
}

/// Post-write bookkeeping shared with decompression: mtime copy and `--rm`.
pub(crate) fn finish_file(src: &str, dst: &str, prefs: &Prefs) -> io::Result<()> {
    let regular_src = src != STDIN_MARK;
    let regular_dst = dst != STDOUT_MARK && dst != NUL_MARK;

    if regular_src && regular_dst {
        if let Err(e) = copy_file_mtime(Path::new(src), Path::new(dst)) {
            displaylevel!(3, "{}: could not copy modification time: {}\n", dst, e);
        }
    }

    if prefs.remove_src_file && regular_src {
        fs::remove_file(src)
            .map_err(|e| io::Error::new(e.kind(), format!("Remove error : {}: {}", src, e)))?;
    }
    Ok(())
}
