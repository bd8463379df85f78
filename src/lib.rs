// crtf: Compressed RTF (LZFu / MELA) codec and command-line tool

pub mod config;
pub mod util;
pub mod threadpool;
pub mod io;
pub mod block;
pub mod frame;
pub mod checksum;
pub mod cli;

// ── Version constants ────────────────────────────────────────────────────────
pub const CRTF_VERSION_MAJOR: u32 = 0;
pub const CRTF_VERSION_MINOR: u32 = 3;
pub const CRTF_VERSION_RELEASE: u32 = 0;
pub const CRTF_VERSION_NUMBER: u32 =
    CRTF_VERSION_MAJOR * 100 * 100 + CRTF_VERSION_MINOR * 100 + CRTF_VERSION_RELEASE;
pub const CRTF_VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the runtime version number.
pub fn version_number() -> u32 {
    CRTF_VERSION_NUMBER
}

/// Returns the runtime version string.
pub fn version_string() -> &'static str {
    CRTF_VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use frame::{decode, decode_with, encode, CrtfError, DecodeOptions, Decoded};
