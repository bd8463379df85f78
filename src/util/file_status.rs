//! File status helpers: type checks and timestamp propagation.

use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

use filetime::FileTime;

/// Returns `true` if `path` refers to a regular file (following symlinks).
pub fn is_reg_file(path: &Path) -> bool {
    fs::metadata(path)
        .map(|m| m.file_type().is_file())
        .unwrap_or(false)
}

/// Returns `true` if `path` refers to a directory.
pub fn is_directory(path: &Path) -> bool {
    fs::metadata(path)
        .map(|m| m.file_type().is_dir())
        .unwrap_or(false)
}

/// Give `dst` the modification time `mtime`; access time becomes "now".
///
/// `dst` must be a regular file.
pub fn set_file_mtime(dst: &Path, mtime: SystemTime) -> io::Result<()> {
    if !is_reg_file(dst) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{}: not a regular file", dst.display()),
        ));
    }
    let atime = FileTime::from_system_time(SystemTime::now());
    filetime::set_file_times(dst, atime, FileTime::from_system_time(mtime))
}

/// Copy the modification time of `src` onto `dst`.
pub fn copy_file_mtime(src: &Path, dst: &Path) -> io::Result<()> {
    let mtime = fs::metadata(src)?.modified()?;
    set_file_mtime(dst, mtime)
}
