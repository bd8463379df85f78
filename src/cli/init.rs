//! CLI initialization and binary-alias detection.
//!
//! `crtf` can be installed under extra names via hard or symbolic links. The
//! name in `argv[0]` selects a starting mode before any flag is parsed:
//!
//! | Binary name | Effect                                                 |
//! |-------------|--------------------------------------------------------|
//! | `crtfcat`   | Decompress every input to stdout, quiet                |
//! | `uncrtf`    | Decompress                                             |
//!
//! Environment defaults (`CRTF_STRICT`, `CRTF_NBWORKERS`) are folded in here
//! too, so the argument parser only layers explicit flags on top.

use std::path::Path;

use crate::cli::op_mode::{
    init_nb_workers, init_nb_workers_from, init_strict, init_strict_from, OpMode,
};
use crate::io::file_io::STDOUT_MARK;
use crate::io::prefs::Prefs;

pub const CRTFCAT: &str = "crtfcat";
pub const UNCRTF: &str = "uncrtf";

/// Initial CLI state derived from the binary name and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliInit {
    /// File-layer preferences before flags are applied.
    pub prefs: Prefs,
    pub op_mode: OpMode,
    /// Every positional argument is an input (set by `crtfcat`).
    pub multiple_inputs: bool,
    /// Worker count from `CRTF_NBWORKERS` (0 = one per core).
    pub nb_workers: usize,
    pub force_stdout: bool,
    /// Explicit output, `Some(STDOUT_MARK)` for `crtfcat`.
    pub output_filename: Option<String>,
    /// Display level the alias asks for; applied by the caller.
    pub display_level_override: Option<u32>,
}

impl Default for CliInit {
    fn default() -> Self {
        detect_alias_with("crtf", None, None)
    }
}

/// Basename of `argv0` without directory or extension (`/usr/bin/uncrtf.exe` → `uncrtf`).
pub fn exe_name(argv0: &str) -> &str {
    Path::new(argv0)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(argv0)
}

/// Detect the starting state from `argv[0]` and the process environment.
pub fn detect_alias(argv0: &str) -> CliInit {
    let mut init = detect_alias_with(argv0, None, None);
    init.prefs.set_strict(init_strict());
    init.nb_workers = init_nb_workers();
    init
}

/// Testable core of [`detect_alias`]: environment values are passed in.
pub fn detect_alias_with(argv0: &str, strict_env: Option<&str>, workers_env: Option<&str>) -> CliInit {
    let mut prefs = Prefs::default();
    prefs.set_strict(init_strict_from(strict_env));

    let mut init = CliInit {
        prefs,
        op_mode: OpMode::Auto,
        multiple_inputs: false,
        nb_workers: init_nb_workers_from(workers_env),
        force_stdout: false,
        output_filename: None,
        display_level_override: None,
    };

    match exe_name(argv0) {
        CRTFCAT => {
            init.op_mode = OpMode::Decompress;
            init.prefs.set_overwrite(true);
            init.force_stdout = true;
            init.output_filename = Some(STDOUT_MARK.to_owned());
            init.multiple_inputs = true;
            init.display_level_override = Some(1);
        }
        UNCRTF => init.op_mode = OpMode::Decompress,
        _ => {}
    }
    init
}
