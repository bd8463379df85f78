//! Input list expansion for `-r`.
//!
//! [`create_file_list`] turns a mix of file and directory arguments into a
//! flat list of file names. Directories are walked with [`walkdir`], sorted
//! by name so runs are reproducible. Symlinks inside a walked directory are
//! neither followed nor listed; a symlink named directly on the command line
//! is passed through like any other file argument.

use std::io;
use std::path::Path;

use walkdir::WalkDir;

fn walk_error(e: walkdir::Error) -> io::Error {
    match e.io_error() {
        Some(inner) => io::Error::new(inner.kind(), e.to_string()),
        None => io::Error::other(e.to_string()),
    }
}

/// Expand `inputs` into regular files.
///
/// The first unreadable directory entry aborts the walk. Non-UTF-8 paths
/// found while walking are converted lossily.
pub fn create_file_list(inputs: &[&str]) -> io::Result<Vec<String>> {
    let mut result = Vec::new();
    for &input in inputs {
        if !Path::new(input).is_dir() {
            result.push(input.to_owned());
            continue;
        }
        for entry in WalkDir::new(input).sort_by_file_name() {
            let entry = entry.map_err(walk_error)?;
            if entry.file_type().is_file() {
                result.push(entry.path().to_string_lossy().into_owned());
            }
        }
    }
    Ok(result)
}
