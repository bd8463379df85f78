//! Binary entry point for the `crtf` command-line tool.
//!
//! # Control flow
//!
//! 1. [`detect_alias`] inspects `argv[0]` and the environment for the starting
//!    state (`uncrtf` implies decompress, `crtfcat` decompresses to stdout).
//! 2. [`parse_args`] layers the command-line flags on top.
//! 3. [`run`] resolves file names, dispatches to the I/O layer, and returns
//!    the exit code.

use std::io::IsTerminal;

use crtf::cli::args::{parse_args, ParsedArgs};
use crtf::cli::constants::{display_level, set_display_level, AUTHOR, COMPRESSOR_NAME};
use crtf::cli::init::detect_alias;
use crtf::cli::op_mode::{determine_op_mode, OpMode};
use crtf::config::CRTF_EXTENSION;
use crtf::io::{
    compress_filename, compress_multiple_filenames, decompress_filename,
    decompress_multiple_filenames, display_compressed_files_info, NUL_MARK, STDIN_MARK,
    STDOUT_MARK,
};

/// Execute the operation selected by argument parsing.
///
/// Returns the process exit code (0 = success, 1 = any failure).
fn run(args: ParsedArgs) -> i32 {
    let ParsedArgs {
        mut prefs,
        mut op_mode,
        force_stdout,
        mut multiple_inputs,
        recursive,
        nb_workers,
        input_filename,
        mut output_filename,
        mut in_file_names,
        display_level: level,
    } = args;

    set_display_level(level);

    crtf::displaylevel!(
        3,
        "*** {} v{} {}-bit, by {} ***\n",
        COMPRESSOR_NAME,
        crtf::CRTF_VERSION_STRING,
        std::mem::size_of::<*const ()>() * 8,
        AUTHOR
    );

    // ── Worker count ─────────────────────────────────────────────────────────
    let workers = prefs.set_nb_workers(nb_workers);
    if multiple_inputs {
        crtf::displaylevel!(4, "Using up to {} worker threads \n", workers);
    }

    // ── Recursive expansion ──────────────────────────────────────────────────
    if recursive {
        let refs: Vec<&str> = in_file_names.iter().map(|s| s.as_str()).collect();
        match crtf::util::create_file_list(&refs) {
            Ok(list) => {
                for (u, p) in list.iter().enumerate() {
                    crtf::displaylevel!(4, "{} {}\n", u, p);
                }
                in_file_names = list;
            }
            Err(e) => {
                crtf::displaylevel!(1, "{}: {}\n", COMPRESSOR_NAME, e);
                return 1;
            }
        }
    }

    // ── Test mode ────────────────────────────────────────────────────────────
    if op_mode == OpMode::Test {
        prefs.set_test_mode(true);
        output_filename = Some(NUL_MARK.to_owned());
        op_mode = OpMode::Decompress;
    }

    // ── List mode ────────────────────────────────────────────────────────────
    if op_mode == OpMode::List {
        if let Some(input) = input_filename {
            in_file_names.push(input);
        }
        if in_file_names.is_empty() {
            crtf::displaylevel!(1, "--list needs at least one file \n");
            return 1;
        }
        let srcs: Vec<&str> = in_file_names.iter().map(|s| s.as_str()).collect();
        return match display_compressed_files_info(&srcs) {
            Ok(()) => 0,
            Err(_) => 1,
        };
    }

    if multiple_inputs && in_file_names.is_empty() {
        multiple_inputs = false;
    }

    // ── Multiple inputs ──────────────────────────────────────────────────────
    if multiple_inputs {
        if op_mode == OpMode::Auto {
            op_mode = determine_op_mode(&in_file_names[0]);
        }
        let to_stdout = output_filename.as_deref() == Some(STDOUT_MARK);
        if to_stdout && std::io::stdout().is_terminal() && !force_stdout {
            crtf::displaylevel!(1, "refusing to write to console without -c \n");
            return 1;
        }
        if to_stdout && display_level() == 2 {
            set_display_level(1);
        }
        let suffix = match output_filename.as_deref() {
            Some(STDOUT_MARK) => STDOUT_MARK,
            Some(NUL_MARK) => NUL_MARK,
            _ => CRTF_EXTENSION,
        };
        let srcs: Vec<&str> = in_file_names.iter().map(|s| s.as_str()).collect();
        return if op_mode == OpMode::Decompress {
            match decompress_multiple_filenames(&srcs, suffix, &prefs) {
                Ok(()) => 0,
                Err(_) => 1,
            }
        } else {
            match compress_multiple_filenames(&srcs, suffix, &prefs) {
                Ok(0) => 0,
                _ => 1,
            }
        };
    }

    // ── Single input ─────────────────────────────────────────────────────────
    let input_filename = input_filename.unwrap_or_else(|| STDIN_MARK.to_owned());

    if input_filename == STDIN_MARK && std::io::stdin().is_terminal() {
        crtf::displaylevel!(1, "refusing to read from a console\n");
        return 1;
    }

    if input_filename == STDIN_MARK && output_filename.is_none() {
        output_filename = Some(STDOUT_MARK.to_owned());
    }

    if op_mode == OpMode::Auto {
        op_mode = determine_op_mode(&input_filename);
    }

    let output_filename = match output_filename {
        Some(out) => out,
        None if op_mode == OpMode::Decompress => match input_filename.strip_suffix(CRTF_EXTENSION) {
            Some(base) if !base.is_empty() => {
                crtf::displaylevel!(2, "Decoding file {} \n", base);
                base.to_owned()
            }
            _ => {
                crtf::displaylevel!(1, "Cannot determine an output filename \n");
                return 1;
            }
        },
        None => {
            let out = format!("{}{}", input_filename, CRTF_EXTENSION);
            crtf::displaylevel!(2, "Compressed filename will be : {} \n", out);
            out
        }
    };

    if output_filename == STDOUT_MARK && std::io::stdout().is_terminal() && !force_stdout {
        crtf::displaylevel!(1, "refusing to write to console without -c \n");
        return 1;
    }
    if output_filename == STDOUT_MARK && display_level() == 2 {
        set_display_level(1);
    }

    let result = if op_mode == OpMode::Decompress {
        decompress_filename(&input_filename, &output_filename, &prefs).map(|_| ())
    } else {
        compress_filename(&input_filename, &output_filename, &prefs).map(|_| ())
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            crtf::displaylevel!(1, "{}: {}\n", COMPRESSOR_NAME, e);
            1
        }
    }
}

fn main() {
    let argv0 = std::env::args().next().unwrap_or_else(|| COMPRESSOR_NAME.to_owned());
    let init = detect_alias(&argv0);

    let args = match parse_args(init) {
        Ok(a) => a,
        Err(e) => {
            // --help / --version and usage errors are rendered by clap itself.
            if let Some(clap_err) = e.downcast_ref::<clap::Error>() {
                let _ = clap_err.print();
                std::process::exit(if clap_err.use_stderr() { 1 } else { 0 });
            }
            crtf::display!("{}: {}\n", COMPRESSOR_NAME, e);
            std::process::exit(1);
        }
    };

    std::process::exit(run(args));
}
