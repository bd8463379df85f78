//! Command-line argument parsing for the `crtf` / `uncrtf` / `crtfcat` family.
//!
//! Flags are declared with `clap`'s derive API in [`Cli`]; [`parse_args_from`]
//! then layers them on top of the alias/environment defaults in [`CliInit`]
//! and resolves positional arguments into a [`ParsedArgs`].
//!
//! Positional arguments follow the usual compressor conventions: the first is
//! the input, the second the output, `-` stands for stdin (as input) or stdout
//! (as output). With `-m` every positional argument is an input.

use anyhow::anyhow;
use clap::{ArgGroup, Parser};

use crate::cli::constants::display_level;
use crate::cli::init::CliInit;
use crate::cli::op_mode::OpMode;
use crate::displaylevel;
use crate::io::file_io::{STDIN_MARK, STDOUT_MARK};
use crate::io::prefs::Prefs;

// ── clap surface ──────────────────────────────────────────────────────────────

/// Compressed RTF (LZFu / MELA) codec.
#[derive(Parser, Debug)]
#[command(
    name = "crtf",
    version = crate::CRTF_VERSION_STRING,
    about = "Compress and decompress RTF bodies in the LZFu container format",
    group(ArgGroup::new("mode").multiple(false))
)]
pub struct Cli {
    /// Force compression
    #[arg(short = 'z', long, group = "mode")]
    pub compress: bool,

    /// Decompress
    #[arg(short = 'd', long, visible_alias = "uncompress", group = "mode")]
    pub decompress: bool,

    /// Test container integrity without writing output
    #[arg(short = 't', long, group = "mode")]
    pub test: bool,

    /// List container headers
    #[arg(short = 'l', long, group = "mode")]
    pub list: bool,

    /// Write stored (uncompressed, "MELA") containers
    #[arg(long)]
    pub store: bool,

    /// Reject payloads without end marker and raw-size mismatches
    #[arg(long)]
    pub strict: bool,

    /// Write to stdout
    #[arg(short = 'c', long, visible_alias = "to-stdout")]
    pub stdout: bool,

    /// Overwrite existing output files
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Keep source files (default)
    #[arg(short = 'k', long, overrides_with = "rm")]
    pub keep: bool,

    /// Remove source files after success
    #[arg(long, overrides_with = "keep")]
    pub rm: bool,

    /// Treat every positional argument as an input file
    #[arg(short = 'm', long)]
    pub multiple: bool,

    /// Recurse into directories (implies -m)
    #[arg(short = 'r', long)]
    pub recursive: bool,

    /// Worker threads for multiple inputs (0 = one per core)
    #[arg(short = 'T', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Increase verbosity (repeatable)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Decrease verbosity (repeatable)
    #[arg(short = 'q', long, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Input and output files
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}

// ── Public output type ────────────────────────────────────────────────────────

/// Complete set of options and filenames produced by argument parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    pub prefs: Prefs,
    pub op_mode: OpMode,
    /// Write to stdout even if it is a terminal.
    pub force_stdout: bool,
    pub multiple_inputs: bool,
    /// Expand directory inputs (requires the `recursive` feature).
    pub recursive: bool,
    /// Requested worker count (0 = one per core).
    pub nb_workers: usize,
    /// Single input (non-multiple mode).
    pub input_filename: Option<String>,
    /// Single output (non-multiple mode), or the stdout sentinel.
    pub output_filename: Option<String>,
    /// Inputs collected in multiple-input mode.
    pub in_file_names: Vec<String>,
    /// Display level after `-v` / `-q`.
    pub display_level: u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse `std::env::args()` on top of `init`.
pub fn parse_args(init: CliInit) -> anyhow::Result<ParsedArgs> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    parse_args_from(init, &argv)
}

/// Parse an explicit argument list (argv[1..]) on top of `init`.
///
/// `--help` and `--version` come back as a [`clap::Error`] inside the
/// `anyhow::Error`; the caller prints it and picks the exit code.
pub fn parse_args_from(init: CliInit, argv: &[String]) -> anyhow::Result<ParsedArgs> {
    let cli = Cli::try_parse_from(std::iter::once("crtf".to_owned()).chain(argv.iter().cloned()))?;

    let CliInit {
        mut prefs,
        op_mode: init_op_mode,
        multiple_inputs: init_multiple_inputs,
        nb_workers: init_nb_workers,
        force_stdout: init_force_stdout,
        output_filename: init_output_filename,
        display_level_override,
    } = init;

    let op_mode = if cli.compress {
        OpMode::Compress
    } else if cli.decompress {
        OpMode::Decompress
    } else if cli.test {
        OpMode::Test
    } else if cli.list {
        OpMode::List
    } else {
        init_op_mode
    };

    if cli.recursive && !cfg!(feature = "recursive") {
        return Err(anyhow!(
            "bad usage: -r requires crtf to be built with the `recursive` feature"
        ));
    }

    if cli.force {
        prefs.set_overwrite(true);
    }
    if cli.rm {
        prefs.set_remove_src_file(true);
    }
    if cli.keep {
        prefs.set_remove_src_file(false);
    }
    if cli.store {
        prefs.set_use_compression(false);
    }
    if cli.strict {
        prefs.set_strict(true);
    }

    let mut force_stdout = init_force_stdout;
    let mut output_filename = init_output_filename;
    if cli.stdout {
        force_stdout = true;
        output_filename = Some(STDOUT_MARK.to_owned());
    }

    let multiple_inputs =
        init_multiple_inputs || cli.multiple || cli.recursive || op_mode == OpMode::List;

    let mut input_filename: Option<String> = None;
    let mut in_file_names: Vec<String> = Vec::new();
    for argument in cli.files {
        if multiple_inputs {
            in_file_names.push(if argument == "-" { STDIN_MARK.to_owned() } else { argument });
        } else if input_filename.is_none() {
            input_filename = Some(if argument == "-" { STDIN_MARK.to_owned() } else { argument });
        } else if output_filename.is_none() {
            output_filename = Some(if argument == "-" { STDOUT_MARK.to_owned() } else { argument });
        } else if prefs.overwrite {
            displaylevel!(
                1,
                "Warning: {} won't be used ! Do you want multiple input files (-m) ? \n",
                argument
            );
        } else {
            return Err(anyhow!(
                "Error: {} won't be used ! Do you want multiple input files (-m) ?",
                argument
            ));
        }
    }

    let base_level = display_level_override.unwrap_or_else(display_level);
    let level = (base_level + u32::from(cli.verbose)).saturating_sub(u32::from(cli.quiet));

    Ok(ParsedArgs {
        prefs,
        op_mode,
        force_stdout,
        multiple_inputs,
        recursive: cli.recursive,
        nb_workers: cli.threads.unwrap_or(init_nb_workers),
        input_filename,
        output_filename,
        in_file_names,
        display_level: level,
    })
}
