//! File I/O primitives for the container pipeline.
//!
//! - [`open_src_file`] resolves a path string to a `Box<dyn Read>`, handling
//!   the `"stdin"` sentinel and rejecting directories.
//! - [`read_src_file`] slurps a whole source; containers carry their sizes up
//!   front, so both directions work on complete buffers.
//! - [`open_dst_file`] resolves a path string to a [`DstFile`], handling the
//!   `"stdout"` and null-device sentinels and enforcing the overwrite policy.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, IsTerminal, Read, Write};
use std::path::Path;

use crate::displaylevel;
use crate::io::prefs::Prefs;
use crate::util::is_directory;

// ---------------------------------------------------------------------------
// Sentinel strings
// ---------------------------------------------------------------------------

/// Sentinel: read from standard input.
pub const STDIN_MARK: &str = "stdin";

/// Sentinel: write to standard output.
pub const STDOUT_MARK: &str = "stdout";

/// Sentinel: discard output.
#[cfg(windows)]
pub const NUL_MARK: &str = "nul";
#[cfg(not(windows))]
pub const NUL_MARK: &str = "/dev/null";

#[inline]
fn is_stdin(s: &str) -> bool {
    s == STDIN_MARK
}

#[inline]
fn is_stdout(s: &str) -> bool {
    s == STDOUT_MARK
}

#[inline]
fn is_dev_null(s: &str) -> bool {
    s == NUL_MARK
}

// ---------------------------------------------------------------------------
// Source file
// ---------------------------------------------------------------------------

/// Opens a source for reading.
///
/// - `"stdin"` returns standard input.
/// - A directory is an [`io::ErrorKind::InvalidInput`] error.
/// - Anything else is opened and wrapped in a [`BufReader`].
pub fn open_src_file(path: &str) -> io::Result<Box<dyn Read>> {
    if is_stdin(path) {
        displaylevel!(4, "Using stdin for input\n");
        return Ok(Box::new(io::stdin()));
    }

    if is_directory(Path::new(path)) {
        displaylevel!(1, "crtf: {} is a directory -- ignored\n", path);
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{}: is a directory", path),
        ));
    }

    let f = File::open(path).map_err(|e| {
        displaylevel!(1, "{}: {}\n", path, e);
        e
    })?;
    Ok(Box::new(BufReader::new(f)))
}

/// Reads the whole source into memory.
pub fn read_src_file(path: &str) -> io::Result<Vec<u8>> {
    let mut src = open_src_file(path)?;
    let mut buf = Vec::new();
    src.read_to_end(&mut buf)?;
    Ok(buf)
}

// ---------------------------------------------------------------------------
// Destination file
// ---------------------------------------------------------------------------

/// A write-capable destination produced by [`open_dst_file`].
pub struct DstFile {
    inner: Box<dyn Write>,
    pub is_stdout: bool,
    /// `true` for the null device; nothing is kept.
    pub is_sink: bool,
}

impl Write for DstFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }
    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Opens a destination for writing.
///
/// - `"stdout"` → stdout.
/// - [`NUL_MARK`] → [`io::sink`]; no file is created.
///
/// For regular paths the overwrite policy from `prefs` applies. When the file
/// exists and `prefs.overwrite` is off, the call fails with
/// [`io::ErrorKind::AlreadyExists`] unless an interactive user on a terminal
/// confirms the overwrite.
pub fn open_dst_file(path: &str, prefs: &Prefs) -> io::Result<DstFile> {
    let interactive = crate::cli::constants::display_level() > 1 && io::stdin().is_terminal();
    open_dst_file_with(path, prefs, interactive)
}

/// [`open_dst_file`] with the prompting decision made by the caller.
pub fn open_dst_file_with(path: &str, prefs: &Prefs, interactive: bool) -> io::Result<DstFile> {
    if is_stdout(path) {
        displaylevel!(4, "Using stdout for output\n");
        return Ok(DstFile {
            inner: Box::new(io::stdout()),
            is_stdout: true,
            is_sink: false,
        });
    }

    if is_dev_null(path) {
        return Ok(DstFile {
            inner: Box::new(io::sink()),
            is_stdout: false,
            is_sink: true,
        });
    }

    if !prefs.overwrite && Path::new(path).exists() {
        confirm_overwrite(path, interactive)?;
    }

    let f = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| {
            displaylevel!(1, "{}: {}\n", path, e);
            e
        })?;

    Ok(DstFile {
        inner: Box::new(io::BufWriter::new(f)),
        is_stdout: false,
        is_sink: false,
    })
}

fn confirm_overwrite(path: &str, interactive: bool) -> io::Result<()> {
    let refused = || {
        io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{}: already exists; not overwritten", path),
        )
    };

    if !interactive {
        displaylevel!(1, "{} already exists; not overwritten  \n", path);
        return Err(refused());
    }

    eprint!("{} already exists; do you want to overwrite (y/N) ? ", path);
    let _ = io::stderr().flush();
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let first = line.trim_start().chars().next().unwrap_or('\0');
    if first != 'y' && first != 'Y' {
        eprintln!("    not overwritten  ");
        return Err(refused());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
