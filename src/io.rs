//! File-level operations used by the `crtf` binary.
//!
//! Both directions read a whole source into memory, run the codec from
//! [`crate::frame`], and write the result; containers declare their sizes up
//! front, so there is no streaming mode.

pub mod compress;
pub mod decompress;
pub mod file_info;
pub mod file_io;
pub mod prefs;

// ── Core type re-exports ─────────────────────────────────────────────────────
pub use file_info::ContainerInfo;
pub use prefs::Prefs;

// ── Special I/O sentinels ────────────────────────────────────────────────────
pub use file_io::{NUL_MARK, STDIN_MARK, STDOUT_MARK};

/// Default worker count for `-T0`.
pub use prefs::default_nb_workers;

// ── Compression ──────────────────────────────────────────────────────────────
pub use compress::{compress_filename, compress_multiple_filenames, CompressStats};

// ── Decompression / test ─────────────────────────────────────────────────────
pub use decompress::{decompress_filename, decompress_multiple_filenames, DecompressStats};

// ── --list ───────────────────────────────────────────────────────────────────
pub use file_info::{display_compressed_files_info, get_container_info};
