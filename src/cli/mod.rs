//! Command-line interface for the `crtf` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity strings and the shared `DISPLAY_LEVEL` with its display macros. |
//! | [`op_mode`]   | `OpMode`, extension-based mode inference, environment-based defaults. |
//! | [`init`]      | `CliInit`: starting state from the binary name (`uncrtf`, `crtfcat`) and environment. |
//! | [`args`]      | `clap` flag definitions and `ParsedArgs`, the resolved set of runtime options. |
//!
//! Typical call sequence: `detect_alias` → `parse_args` → dispatch to the I/O layer.

pub mod constants;
pub mod op_mode;
pub mod init;
pub mod args;
