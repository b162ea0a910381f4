//! The capability every concrete tool gives the engine.

use std::fmt;

use crate::cli::arg_utils::parse_int;
use crate::cli::diagnostics::Diagnostics;
use crate::cli::error::CliError;
use crate::cli::options::{CommandOptions, OptCode, OptionTableBuilder};

/// Tool-specific options and usage text.
///
/// The engine owns the tool for the duration of parsing and hands every
/// option code it does not handle itself to [`Tool::handle_option`].
pub trait Tool: Sized {
    /// Appends the tool's options to the base table.
    fn extend_options(&self, table: OptionTableBuilder<Self>) -> OptionTableBuilder<Self> {
        table
    }

    /// Applies one option.  Returning `false` makes the engine print usage
    /// and stop with exit code 1.
    fn handle_option(&mut self, ctx: &mut OptionContext<'_>, code: OptCode) -> bool;

    /// Usage text printed before the base flags' description.
    fn usage_text(&self) -> String;
}

/// What a tool can see and touch while handling one option.
pub struct OptionContext<'a> {
    pub(crate) optarg: Option<&'a str>,
    pub(crate) token: &'a str,
    pub(crate) diag: &'a mut Diagnostics,
    pub options: &'a mut CommandOptions,
}

impl<'a> OptionContext<'a> {
    /// Value attached to the option, if it takes one.
    pub fn optarg(&self) -> Option<&'a str> {
        self.optarg
    }

    /// The option as written on the command line, without its value.
    pub fn token(&self) -> &'a str {
        self.token
    }

    pub fn error(&mut self, message: fmt::Arguments<'_>) {
        self.diag.error(message);
    }

    /// Suppressed when warnings are disabled.
    pub fn warning(&mut self, message: fmt::Arguments<'_>) {
        self.diag.warning(self.options.warn, message);
    }

    /// Parses the option value as an integer (`0x` hex and `0` octal
    /// prefixes accepted).  Reports and returns `None` when it is not one.
    pub fn parse_int(&mut self) -> Option<i32> {
        let arg = self.optarg.unwrap_or("");
        match parse_int(arg) {
            Ok(value) => Some(value),
            Err(rest) => {
                let err = CliError::NotANumber(rest.to_owned());
                self.diag.error(format_args!("{err}"));
                None
            }
        }
    }
}
