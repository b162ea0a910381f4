//! Parse outcomes that end the program early.
//!
//! The engine never exits the process.  It reports the problem on the
//! diagnostic stream and hands a [`Termination`] back to the tool's entry
//! point, which picks the exit status with [`Termination::exit_code`].

use thiserror::Error;

use crate::util::file_list::FileListError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("missing required option argument.")]
    MissingArgument { option: String },

    #[error("unrecognized option \"{0}\".")]
    UnknownOption(String),

    /// The tool's option handler refused the option or its value.
    #[error("invalid option \"{0}\".")]
    OptionRejected(String),

    #[error("Argument \"{0}\" not a number.")]
    NotANumber(String),

    #[error("cannot use stdin as one among many inputs.")]
    StdinAmongMany,

    #[error("need some input files.")]
    NoInputFiles,

    #[error(transparent)]
    FileList(#[from] FileListError),
}

impl CliError {
    /// A missing option value exits 0 while every other failure exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::MissingArgument { .. } => 0,
            _ => 1,
        }
    }

    /// Whether the usage text accompanied the report.
    pub fn shows_usage(&self) -> bool {
        !matches!(self, CliError::FileList(_))
    }
}

/// Why option processing stopped before the tool could run.
#[derive(Debug, Error)]
pub enum Termination {
    #[error("help requested")]
    Help,
    #[error("version requested")]
    Version,
    #[error(transparent)]
    Error(#[from] CliError),
}

impl Termination {
    pub fn exit_code(&self) -> i32 {
        match self {
            Termination::Help | Termination::Version => 0,
            Termination::Error(err) => err.exit_code(),
        }
    }

    /// Ends the process with [`Termination::exit_code`].
    pub fn exit(self) -> ! {
        std::process::exit(self.exit_code())
    }
}
