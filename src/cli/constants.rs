// cli/constants.rs: Program identity strings, the shared display level, and
// the display macros used across the CLI and I/O layers.

use std::sync::atomic::{AtomicU32, Ordering};

// ── String / identity constants ──────────────────────────────────────────────
pub const COMPRESSOR_NAME: &str = "crtf";
pub const AUTHOR: &str = "the crtf authors";

// ── Display level global ─────────────────────────────────────────────────────
//
// 0 = no output; 1 = errors only; 2 = results + warnings (downgradable);
// 3 = progress; 4 = verbose
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

// ── Display helpers ──────────────────────────────────────────────────────────
//
//   displayout!(...)      → stdout
//   display!(...)         → stderr
//   displaylevel!(l, ...) → stderr when display_level() >= l

/// Print to stdout.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Print to stderr.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
