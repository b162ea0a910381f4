//! Program identity derived from `argv[0]`.
//!
//! Tools may be invoked through any path and, on Windows, with an `.exe`
//! suffix; diagnostics always use the bare stem so output is stable.

use std::fmt;

use crate::cli::arg_utils::{last_name_from_path, strip_extension};

/// Stem of the invoked program name, used as the prefix of every diagnostic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramIdentity {
    name: String,
}

impl ProgramIdentity {
    /// Strips the directory and the extension from `argv0`.
    pub fn from_argv0(argv0: &str) -> Self {
        let name = strip_extension(last_name_from_path(argv0));
        ProgramIdentity {
            name: name.to_owned(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ProgramIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
