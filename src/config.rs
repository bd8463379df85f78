// config.rs: Compile-time configuration constants.
//
// Runtime overrides come from the CRTF_* environment variables (read once at
// CLI start, see cli::op_mode) and from command-line flags.

// Whether new containers are compressed ("LZFu") rather than stored ("MELA").
// Overridden by --store.
pub const COMPRESS_DEFAULT: bool = true;

// Whether decoding rejects payloads without an end-of-stream marker.
// Can be overridden by the CRTF_STRICT environment variable,
// or by the --strict command-line flag.
pub const STRICT_DEFAULT: bool = false;

// Default number of worker threads for multi-file runs (0 = one per core).
// Can be overridden by the CRTF_NBWORKERS environment variable,
// or by the -T# command-line flag.
pub const NB_WORKERS_DEFAULT: usize = 1;

// Maximum number of worker threads selectable at runtime.
pub const NB_WORKERS_MAX: usize = 200;

// File extension of compressed containers.
pub const CRTF_EXTENSION: &str = ".lzfu";
