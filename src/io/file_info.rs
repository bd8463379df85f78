//! Container information display for `--list`.
//!
//! Reads only the 16-byte header of each file and prints one table row per
//! container: type tag, compressed and raw sizes, ratio, and checksum.
//!
//! Entry point: [`display_compressed_files_info`].

use std::fs;
use std::io::{self, Read};

use crate::displayout;
use crate::frame::{read_header, ContainerHeader, ContainerType, CrtfError, HEADER_SIZE};
use crate::io::file_io::{open_src_file, STDIN_MARK};

/// Everything `--list` knows about one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerInfo {
    pub file_name: String,
    pub header: ContainerHeader,
    /// `None` when the type tag is not recognised.
    pub container: Option<ContainerType>,
    /// Size of the file on disk.
    pub file_size: u64,
}

impl ContainerInfo {
    /// Container bytes per 100 original bytes.
    pub fn ratio_percent(&self) -> f64 {
        if self.header.raw_size == 0 {
            return 0.0;
        }
        self.file_size as f64 / self.header.raw_size as f64 * 100.0
    }

    pub fn type_name(&self) -> &'static str {
        self.container.map(ContainerType::name).unwrap_or("????")
    }
}

/// Read the header of the container stored in `path`.
///
/// Fails with [`io::ErrorKind::InvalidData`] when the file is shorter than a
/// header. `stdin` is not supported.
pub fn get_container_info(path: &str) -> io::Result<ContainerInfo> {
    if path == STDIN_MARK {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "--list does not support stdin",
        ));
    }

    let file_size = fs::metadata(path)?.len();
    let mut src = open_src_file(path)?;
    let mut buf = Vec::with_capacity(HEADER_SIZE);
    src.by_ref().take(HEADER_SIZE as u64).read_to_end(&mut buf)?;

    let header = read_header(&buf)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("{}: {}", path, e)))?;

    Ok(ContainerInfo {
        file_name: path.to_owned(),
        container: header.container_type().ok(),
        header,
        file_size,
    })
}

/// Formats a byte count with the largest applicable binary prefix
/// (K/M/G/T), two decimals, e.g. `"3.14M"`.
fn to_human(mut size: f64) -> String {
    const UNITS: &[&str] = &["", "K", "M", "G", "T"];
    let mut i = 0usize;
    while size >= 1024.0 && i + 1 < UNITS.len() {
        size /= 1024.0;
        i += 1;
    }
    format!("{:.2}{}", size, UNITS[i])
}

/// One row of the `--list` table.
pub fn format_info_row(info: &ContainerInfo) -> String {
    format!(
        "{:<6} {:>12} {:>12} {:>8.2}% 0x{:08x}  {}",
        info.type_name(),
        to_human(info.file_size as f64),
        to_human(info.header.raw_size as f64),
        info.ratio_percent(),
        info.header.checksum,
        info.file_name
    )
}

/// Print a `--list` table for `srcs` on stdout.
///
/// Unreadable files are reported on stderr and counted; the call fails if
/// any file could not be listed.
pub fn display_compressed_files_info(srcs: &[&str]) -> io::Result<()> {
    displayout!(
        "{:<6} {:>12} {:>12} {:>9} {:<10}  {}\n",
        "Type",
        "Compressed",
        "Uncompressed",
        "Ratio",
        "CRC",
        "Filename"
    );

    let mut failures = 0usize;
    for &src in srcs {
        match get_container_info(src) {
            Ok(info) => {
                displayout!("{}\n", format_info_row(&info));
                if info.container.is_none() {
                    crate::displaylevel!(
                        2,
                        "{}: {}\n",
                        src,
                        CrtfError::UnknownTypeTag(info.header.tag)
                    );
                }
            }
            Err(e) => {
                crate::displaylevel!(1, "crtf: {}\n", e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(io::Error::other(format!("{} file(s) could not be listed", failures)));
    }
    Ok(())
}
