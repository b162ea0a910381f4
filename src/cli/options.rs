//! Option table: the static description of every flag a tool recognises.
//!
//! A table is built fresh for each engine by [`OptionTable::builder`], which
//! seeds the base flags shared by every tool (`--help`, `--version`,
//! `--test`, `--ld`, and the absorbed `NSDocumentRevisionsDebugMode`).  The
//! owning tool then appends its own long options and short-option letters.
//!
//! Each long option either routes to a numeric [`OptCode`] handled by the
//! dispatch loop, or carries a [`Setter`] the scanner applies directly, in
//! which case the loop only sees [`OptCode::FLAG`].

use std::fmt;

/// Mutable state shared by the engine and the owning tool.
///
/// Constructed with defaults before parsing, filled in by the option loop and
/// positional resolution, and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOptions {
    /// Input files in command-line order.  Holds the stdin mark `-` alone
    /// when no inputs were given and stdin is allowed.
    pub infiles: Vec<String>,
    /// Output file; empty when unset.
    pub outfile: String,
    /// Test mode: report the stable default version instead of the real one.
    pub test: bool,
    /// Emit warnings (cleared by tools that offer a no-warnings flag).
    pub warn: bool,
    /// Run the debugger hook once option parsing finishes.
    pub launch_debugger: bool,
}

impl Default for CommandOptions {
    fn default() -> Self {
        CommandOptions {
            infiles: Vec::new(),
            outfile: String::new(),
            test: false,
            warn: true,
            launch_debugger: false,
        }
    }
}

/// Numeric code identifying a recognised option.
///
/// Short options use their character value.  Long-only options pick any
/// value that does not collide with a short letter or one of the reserved
/// codes below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptCode(pub u32);

impl OptCode {
    /// A table-bound flag whose setter has already run.
    pub const FLAG: OptCode = OptCode(0);
    /// A required option value was missing.
    pub const MISSING: OptCode = OptCode(':' as u32);
    /// The token did not match any option in the table.
    pub const UNKNOWN: OptCode = OptCode('?' as u32);
    pub const HELP: OptCode = OptCode('h' as u32);
    pub const VERSION: OptCode = OptCode('v' as u32);
    /// Option-with-value injected by IDEs; always ignored.
    pub const ABSORBED: OptCode = OptCode(crate::config::ABSORBED_OPTION_CODE);

    /// Returns the short-option letter this code stands for, if any.
    pub fn as_char(self) -> Option<char> {
        char::from_u32(self.0)
    }
}

impl From<char> for OptCode {
    fn from(c: char) -> Self {
        OptCode(c as u32)
    }
}

impl fmt::Display for OptCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_char() {
            Some(c) if c.is_ascii_graphic() => write!(f, "-{c}"),
            _ => write!(f, "#{}", self.0),
        }
    }
}

/// Whether an option takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HasArg {
    No,
    Required,
    Optional,
}

/// Setter applied by the scanner when a table-bound flag matches.
pub type Setter<T> = fn(&mut CommandOptions, &mut T);

/// What happens when a long option matches.
pub enum OptionAction<T> {
    /// Apply the setter; the dispatch loop receives [`OptCode::FLAG`].
    Set(Setter<T>),
    /// Hand the code to the dispatch loop.
    Code(OptCode),
}

impl<T> Clone for OptionAction<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for OptionAction<T> {}

/// One long option.
pub struct OptionSpec<T> {
    pub name: &'static str,
    pub has_arg: HasArg,
    pub action: OptionAction<T>,
}

impl<T> Clone for OptionSpec<T> {
    fn clone(&self) -> Self {
        OptionSpec {
            name: self.name,
            has_arg: self.has_arg,
            action: self.action,
        }
    }
}

impl<T> fmt::Debug for OptionSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self.action {
            OptionAction::Set(_) => "set".to_owned(),
            OptionAction::Code(code) => code.to_string(),
        };
        f.debug_struct("OptionSpec")
            .field("name", &self.name)
            .field("has_arg", &self.has_arg)
            .field("action", &action)
            .finish()
    }
}

/// Long options plus the short-option letters of one tool.
#[derive(Debug, Clone)]
pub struct OptionTable<T> {
    long: Vec<OptionSpec<T>>,
    short: Vec<(char, HasArg)>,
}

impl<T> OptionTable<T> {
    /// Starts a table pre-populated with the base flags.
    pub fn builder() -> OptionTableBuilder<T> {
        OptionTableBuilder::new()
    }

    /// Looks up a long option by exact name.
    pub fn find_long(&self, name: &str) -> Option<&OptionSpec<T>> {
        self.long.iter().find(|spec| spec.name == name)
    }

    /// Looks up a short option letter.
    pub fn find_short(&self, c: char) -> Option<HasArg> {
        self.short
            .iter()
            .find(|(letter, _)| *letter == c)
            .map(|(_, has_arg)| *has_arg)
    }

    pub fn long_options(&self) -> &[OptionSpec<T>] {
        &self.long
    }
}

/// Builder for [`OptionTable`].
pub struct OptionTableBuilder<T> {
    long: Vec<OptionSpec<T>>,
    short: Vec<(char, HasArg)>,
}

impl<T> OptionTableBuilder<T> {
    fn new() -> Self {
        let builder = OptionTableBuilder {
            long: Vec::new(),
            short: Vec::new(),
        }
        .short_options("hv")
        .code("help", HasArg::No, OptCode::HELP)
        .code("version", HasArg::No, OptCode::VERSION)
        .flag("test", |options, _| options.test = true);

        #[cfg(debug_assertions)]
        let builder = builder.flag("ld", |options, _| options.launch_debugger = true);

        // Xcode appends `-NSDocumentRevisionsDebugMode YES` when debugging
        // with the document versions browser enabled.
        builder.code(
            "NSDocumentRevisionsDebugMode",
            HasArg::Required,
            OptCode::ABSORBED,
        )
    }

    /// Appends short options in getopt syntax: a letter followed by `:`
    /// requires a value, by `::` takes an optional one.
    pub fn short_options(mut self, spec: &str) -> Self {
        let mut chars = spec.chars().peekable();
        while let Some(c) = chars.next() {
            if c == ':' || c.is_whitespace() {
                continue;
            }
            let mut has_arg = HasArg::No;
            if chars.peek() == Some(&':') {
                chars.next();
                has_arg = HasArg::Required;
                if chars.peek() == Some(&':') {
                    chars.next();
                    has_arg = HasArg::Optional;
                }
            }
            self.short.retain(|(letter, _)| *letter != c);
            self.short.push((c, has_arg));
        }
        self
    }

    /// Appends a long option dispatched by code.
    pub fn code(mut self, name: &'static str, has_arg: HasArg, code: impl Into<OptCode>) -> Self {
        self.long.push(OptionSpec {
            name,
            has_arg,
            action: OptionAction::Code(code.into()),
        });
        self
    }

    /// Appends a value-less long option bound to a setter.
    pub fn flag(mut self, name: &'static str, setter: Setter<T>) -> Self {
        self.long.push(OptionSpec {
            name,
            has_arg: HasArg::No,
            action: OptionAction::Set(setter),
        });
        self
    }

    pub fn build(self) -> OptionTable<T> {
        OptionTable {
            long: self.long,
            short: self.short,
        }
    }
}
