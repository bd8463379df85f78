//! Operation mode selection and startup defaults for the CLI.
//!
//! This module provides:
//! - [`OpMode`]: what the CLI should do (compress, decompress, test, list).
//! - [`determine_op_mode`]: infers the intended mode from a filename's extension.
//! - [`init_nb_workers`] / [`init_strict`]: read per-process defaults from
//!   environment variables, with testable `*_from` cores.

use crate::cli::constants::display_level;
use crate::config::{CRTF_EXTENSION, NB_WORKERS_DEFAULT, STRICT_DEFAULT};

pub const ENV_NBWORKERS: &str = "CRTF_NBWORKERS";
pub const ENV_STRICT: &str = "CRTF_STRICT";

/// What the CLI should do with its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpMode {
    /// Mode inferred from the filename extension: decompress if `.lzfu`, compress otherwise.
    Auto,
    /// Wrap input in a container.
    Compress,
    /// Unwrap a container.
    Decompress,
    /// Decode and verify without writing output.
    Test,
    /// Print container headers.
    List,
}

/// Infer the operation mode from `filename`'s extension.
///
/// Returns [`OpMode::Decompress`] if `filename` ends with `.lzfu`,
/// [`OpMode::Compress`] otherwise.
pub fn determine_op_mode(filename: &str) -> OpMode {
    if filename.ends_with(CRTF_EXTENSION) {
        OpMode::Decompress
    } else {
        OpMode::Compress
    }
}

/// Read the number of worker threads from `CRTF_NBWORKERS`.
pub fn init_nb_workers() -> usize {
    init_nb_workers_from(std::env::var(ENV_NBWORKERS).ok().as_deref())
}

/// Testable core of [`init_nb_workers`]: parse an optional `CRTF_NBWORKERS` value.
///
/// Pass `None` to simulate the variable being unset. Anything that is not an
/// unsigned decimal number is reported at level 2 and ignored.
pub fn init_nb_workers_from(env_val: Option<&str>) -> usize {
    if let Some(env) = env_val {
        if let Ok(val) = env.trim().parse::<usize>() {
            return val;
        }
        if display_level() >= 2 {
            eprintln!(
                "Ignore environment variable setting {}={}: not a valid unsigned value ",
                ENV_NBWORKERS, env
            );
        }
    }
    NB_WORKERS_DEFAULT
}

/// Read the strict-decoding default from `CRTF_STRICT`.
pub fn init_strict() -> bool {
    init_strict_from(std::env::var(ENV_STRICT).ok().as_deref())
}

/// Testable core of [`init_strict`]. Accepts `0`/`1` and `false`/`true`.
pub fn init_strict_from(env_val: Option<&str>) -> bool {
    if let Some(env) = env_val {
        match env.trim() {
            "1" | "true" => return true,
            "0" | "false" => return false,
            _ => {
                if display_level() >= 2 {
                    eprintln!(
                        "Ignore environment variable setting {}={}: expected 0 or 1 ",
                        ENV_STRICT, env
                    );
                }
            }
        }
    }
    STRICT_DEFAULT
}
