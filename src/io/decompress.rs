//! File-level decompression and integrity testing.
//!
//! Public API:
//! - [`decompress_filename`]: one source/destination pair
//! - [`decompress_multiple_filenames`]: a list of sources; outputs are named
//!   by stripping `suffix`, and sources without it are skipped
//!
//! Codec errors are reported as [`io::ErrorKind::InvalidData`] carrying the
//! codec's message.

use std::io::{self, Write};

use crate::block::Termination;
use crate::displaylevel;
use crate::frame::{decode_with, ContainerType};
use crate::io::compress::finish_file;
use crate::io::file_io::{open_dst_file, read_src_file, NUL_MARK, STDOUT_MARK};
use crate::io::prefs::Prefs;
use crate::threadpool::TPool;

/// Statistics returned by [`decompress_filename`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecompressStats {
    pub container: ContainerType,
    /// Bytes written to the destination.
    pub decompressed_bytes: u64,
    /// `false` when a lenient decode accepted a payload without end marker.
    pub clean: bool,
}

/// Decode the container in `src` into `dst`.
///
/// In test mode (`prefs.test_mode`) the output is discarded whatever `dst` is.
pub fn decompress_filename(src: &str, dst: &str, prefs: &Prefs) -> io::Result<DecompressStats> {
    let dst = if prefs.test_mode { NUL_MARK } else { dst };

    let input = read_src_file(src)?;
    let decoded = decode_with(&input, &prefs.decode_options())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("{}: {}", src, e)))?;

    displaylevel!(
        4,
        "{}: {} container, {} bytes declared\n",
        src,
        decoded.container.name(),
        decoded.declared_size
    );
    if decoded.termination == Some(Termination::Exhausted) {
        displaylevel!(3, "{}: payload has no end-of-stream marker (tolerated)\n", src);
    }

    let mut out = open_dst_file(dst, prefs)?;
    out.write_all(&decoded.data)?;
    out.flush()?;
    drop(out);

    if !prefs.test_mode {
        finish_file(src, dst, prefs)?;
    }

    let stats = DecompressStats {
        container: decoded.container,
        decompressed_bytes: decoded.data.len() as u64,
        clean: decoded.is_clean(),
    };
    if prefs.test_mode {
        displaylevel!(2, "{:<30.30} : OK ({} bytes) \n", src, stats.decompressed_bytes);
    } else {
        displaylevel!(2, "{:<30.30} : decoded {} bytes \n", src, stats.decompressed_bytes);
    }
    Ok(stats)
}

/// Decode every file in `srcs`.
///
/// When `suffix` is the stdout or null-device sentinel all outputs go there,
/// in input order. Otherwise each source must end with `suffix`, which is
/// stripped to name its output; other sources are skipped with a message.
///
/// Returns `Ok(())` only if every file succeeded.
pub fn decompress_multiple_filenames(srcs: &[&str], suffix: &str, prefs: &Prefs) -> io::Result<()> {
    let to_special = suffix == STDOUT_MARK || suffix == NUL_MARK || prefs.test_mode;

    let mut skipped = 0usize;
    let mut jobs: Vec<(&str, String)> = Vec::with_capacity(srcs.len());
    for &src in srcs {
        if to_special {
            jobs.push((src, suffix.to_owned()));
            continue;
        }
        match src.strip_suffix(suffix) {
            Some(base) if !base.is_empty() => jobs.push((src, base.to_owned())),
            _ => {
                displaylevel!(
                    1,
                    "File extension doesn't match expected extension ({}); will not process file: {}\n",
                    suffix,
                    src
                );
                skipped += 1;
            }
        }
    }

    let results: Vec<io::Result<DecompressStats>> = if to_special || prefs.nb_workers <= 1 {
        jobs.iter()
            .map(|(src, dst)| decompress_filename(src, dst, prefs))
            .collect()
    } else {
        let pool = TPool::new(prefs.nb_workers.min(jobs.len().max(1)))?;
        pool.map(&jobs, |(src, dst)| decompress_filename(src, dst, prefs))
    };

    let mut missing = 0usize;
    let mut total: u64 = 0;
    for ((src, _), result) in jobs.iter().zip(results) {
        match result {
            Ok(s) => total += s.decompressed_bytes,
            Err(e) => {
                displaylevel!(1, "crtf: {}\n", decorate(src, &e));
                missing += 1;
            }
        }
    }

    displaylevel!(3, "{} files decoded, {} bytes total \n", jobs.len() - missing, total);

    if missing + skipped > 0 {
        return Err(io::Error::other(format!(
            "{} file(s) failed, {} file(s) skipped",
            missing, skipped
        )));
    }
    Ok(())
}

// Codec errors already carry the file name.
fn decorate(src: &str, e: &io::Error) -> String {
    if e.kind() == io::ErrorKind::InvalidData {
        e.to_string()
    } else {
        format!("{}: {}", src, e)
    }
}
