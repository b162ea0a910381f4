//! Command-line front end shared by every tool.
//!
//! | Submodule       | Responsibility |
//! |-----------------|---------------|
//! | [`options`]     | `CommandOptions`, `OptCode`, and the per-tool `OptionTable` builder. |
//! | [`getopt`]      | `ArgParser` — the short/long option scanner. |
//! | [`engine`]      | `OptionEngine` — flag dispatch, positional resolution, usage and version output. |
//! | [`tool`]        | `Tool` — the capability a concrete tool implements, and its `OptionContext`. |
//! | [`identity`]    | `ProgramIdentity` — program name derived from `argv[0]`. |
//! | [`diagnostics`] | Name-prefixed error and warning output. |
//! | [`error`]       | `CliError` and `Termination` with their exit codes. |
//! | [`debugger`]    | `DebuggerHook` run for `--ld`. |
//! | [`arg_utils`]   | Path basename/extension helpers and `strtol`-style integer parsing. |
//!
//! Typical call sequence: `OptionEngine::new(tool)` →
//! `process_command_line(argv, stdin_policy, outfile_policy)` → the tool's
//! own work on `engine.options()`.

pub mod arg_utils;
pub mod debugger;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod getopt;
pub mod identity;
pub mod options;
pub mod tool;

pub use engine::{OptionEngine, OutfilePolicy, StdinPolicy, VersionInfo};
pub use error::{CliError, Termination};
pub use options::{CommandOptions, HasArg, OptCode};
pub use tool::{OptionContext, Tool};
