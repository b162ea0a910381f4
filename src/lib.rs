// ktxapp — shared command-line application base for KTX tools.
//
// Every tool binary builds an `OptionEngine` around its own `Tool`
// implementation; the engine owns option parsing, `@listfile` expansion,
// stdin substitution and the usage / version / diagnostic conventions.
// `ktxcat` in `cat` is the reference tool and the shipped binary.

pub mod config;
pub mod util;
pub mod cli;
pub mod cat;

pub use cli::{
    CliError, CommandOptions, HasArg, OptCode, OptionContext, OptionEngine, OutfilePolicy,
    StdinPolicy, Termination, Tool, VersionInfo,
};
