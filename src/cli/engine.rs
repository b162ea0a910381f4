//! The option engine: flag loop, positional resolution and the shared
//! usage / version / diagnostic plumbing.
//!
//! # Control flow
//!
//! 1. [`OptionEngine::process_command_line`] derives the
//!    [`ProgramIdentity`] from `argv[0]`.
//! 2. [`OptionEngine::process_options`] scans flags until the first
//!    positional argument.  Help, version and usage errors stop here.
//! 3. The remaining arguments are split into input files and the output
//!    file according to the tool's [`OutfilePolicy`]; `@`/`@@` tokens are
//!    expanded from list files.
//! 4. Empty input lists become stdin when the [`StdinPolicy`] allows it.
//!
//! Nothing here exits the process.  Early stops come back as a
//! [`Termination`] after the matching diagnostic has been written.

use std::fmt;
use std::io::{self, Write};

use log::{debug, trace};

use crate::cli::debugger::{DebuggerHook, NoDebugger};
use crate::cli::diagnostics::Diagnostics;
use crate::cli::error::{CliError, Termination};
use crate::cli::getopt::ArgParser;
use crate::cli::identity::ProgramIdentity;
use crate::cli::options::{CommandOptions, OptCode, OptionTable};
use crate::cli::tool::{OptionContext, Tool};
use crate::config::{DEFAULT_VERSION, STDIN_MARK, VERSION};
use crate::util::file_list::load_file_list_into;

/// Where the output filename sits among the positional arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutfilePolicy {
    None,
    First,
    Last,
}

/// Whether an empty input list means "read standard input".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdinPolicy {
    Disallow,
    Allow,
}

/// Real version and the stable version reported in test mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub version: String,
    pub default_version: String,
}

impl VersionInfo {
    pub fn new(version: impl Into<String>, default_version: impl Into<String>) -> Self {
        VersionInfo {
            version: version.into(),
            default_version: default_version.into(),
        }
    }
}

impl Default for VersionInfo {
    fn default() -> Self {
        VersionInfo::new(VERSION, DEFAULT_VERSION)
    }
}

const BASE_USAGE: &str = "  -h, --help    Print this usage message and exit.\n  \
                          -v, --version Print the version number of this program and exit.\n";

#[cfg(debug_assertions)]
const DEBUGGER_USAGE: &str = "      --ld      Launch a debugger at start up.\n";
#[cfg(not(debug_assertions))]
const DEBUGGER_USAGE: &str = "";

pub struct OptionEngine<T: Tool> {
    tool: T,
    table: OptionTable<T>,
    options: CommandOptions,
    identity: ProgramIdentity,
    versions: VersionInfo,
    diag: Diagnostics,
    debugger: Box<dyn DebuggerHook>,
}

impl<T: Tool> OptionEngine<T> {
    /// Builds the option table from the base flags plus `tool`'s extensions.
    /// Diagnostics go to stderr and `--ld` does nothing until configured.
    pub fn new(tool: T) -> Self {
        let table = tool.extend_options(OptionTable::builder()).build();
        OptionEngine {
            tool,
            table,
            options: CommandOptions::default(),
            identity: ProgramIdentity::default(),
            versions: VersionInfo::default(),
            diag: Diagnostics::stderr(),
            debugger: Box::new(NoDebugger),
        }
    }

    pub fn with_versions(mut self, versions: VersionInfo) -> Self {
        self.versions = versions;
        self
    }

    /// Redirects diagnostics (usage, errors, warnings, version) to `sink`.
    pub fn with_diagnostics(mut self, sink: impl Write + 'static) -> Self {
        self.diag = Diagnostics::new(sink);
        self.diag.set_name(self.identity.name());
        self
    }

    pub fn with_debugger_hook(mut self, hook: impl DebuggerHook + 'static) -> Self {
        self.debugger = Box::new(hook);
        self
    }

    /// Parses `argv` (program path first) into [`CommandOptions`].
    ///
    /// On `Ok`, `infiles` is non-empty and never mixes `-` with other
    /// inputs.  A missing output file under `OutfilePolicy::First`/`Last` is
    /// reported but does not stop parsing; callers needing one must check
    /// `outfile`.
    pub fn process_command_line(
        &mut self,
        argv: &[String],
        stdin_policy: StdinPolicy,
        outfile_policy: OutfilePolicy,
    ) -> Result<(), Termination> {
        let argv0 = argv.first().map(String::as_str).unwrap_or_default();
        self.identity = ProgramIdentity::from_argv0(argv0);
        self.diag.set_name(self.identity.name());

        let mut parser = ArgParser::new(argv);
        self.process_options(&mut parser)?;
        self.resolve_positionals(argv, parser.optind(), stdin_policy, outfile_policy)?;

        debug!(
            "{}: {} input(s), outfile {:?}",
            self.identity,
            self.options.infiles.len(),
            self.options.outfile
        );
        Ok(())
    }

    /// The flag loop.  Stops at the first positional argument.
    pub fn process_options(&mut self, parser: &mut ArgParser<'_>) -> Result<(), Termination> {
        while let Some(code) = parser.getopt(&self.table, &mut self.options, &mut self.tool) {
            trace!("option {} -> {}", parser.current(), code);
            match code {
                OptCode::FLAG | OptCode::ABSORBED => {}
                OptCode::HELP => {
                    self.usage();
                    return Err(Termination::Help);
                }
                OptCode::VERSION => {
                    self.print_version();
                    return Err(Termination::Version);
                }
                OptCode::MISSING => {
                    let err = CliError::MissingArgument {
                        option: parser.current().to_owned(),
                    };
                    return Err(self.usage_error(err));
                }
                OptCode::UNKNOWN => {
                    let err = CliError::UnknownOption(parser.current().to_owned());
                    return Err(self.usage_error(err));
                }
                _ => {
                    let mut ctx = OptionContext {
                        optarg: parser.optarg(),
                        token: parser.current(),
                        diag: &mut self.diag,
                        options: &mut self.options,
                    };
                    if !self.tool.handle_option(&mut ctx, code) {
                        self.usage();
                        let err = CliError::OptionRejected(parser.current().to_owned());
                        return Err(err.into());
                    }
                }
            }
        }

        if self.options.launch_debugger && !self.debugger.launch(&self.identity) {
            debug!("{}: no debugger launched", self.identity);
        }
        Ok(())
    }

    fn resolve_positionals(
        &mut self,
        argv: &[String],
        first: usize,
        stdin_policy: StdinPolicy,
        outfile_policy: OutfilePolicy,
    ) -> Result<(), Termination> {
        let mut i = first;
        if argv.len() > i {
            if outfile_policy == OutfilePolicy::First {
                self.options.outfile = argv[i].clone();
                i += 1;
            }
            let infile_count = match outfile_policy {
                OutfilePolicy::Last => argv.len() - 1,
                _ => argv.len(),
            };
            while i < infile_count {
                let arg = &argv[i];
                if arg.starts_with('@') {
                    if let Err(err) = load_file_list_into(arg, &mut self.options.infiles) {
                        let err = CliError::from(err);
                        self.error(format_args!("{err}"));
                        return Err(err.into());
                    }
                } else {
                    self.options.infiles.push(arg.clone());
                }
                i += 1;
            }
            if self.options.infiles.len() > 1
                && self.options.infiles.iter().any(|f| f == STDIN_MARK)
            {
                return Err(self.usage_error(CliError::StdinAmongMany));
            }
            if outfile_policy == OutfilePolicy::Last {
                self.options.outfile = argv[i].clone();
            }
        }

        if self.options.infiles.is_empty() {
            match stdin_policy {
                StdinPolicy::Allow => self.options.infiles.push(STDIN_MARK.to_owned()),
                StdinPolicy::Disallow => return Err(self.usage_error(CliError::NoInputFiles)),
            }
        }
        if outfile_policy != OutfilePolicy::None && self.options.outfile.is_empty() {
            self.error(format_args!("need an output file"));
        }
        Ok(())
    }

    fn usage_error(&mut self, err: CliError) -> Termination {
        self.error(format_args!("{err}"));
        self.usage();
        err.into()
    }

    /// Writes the tool's usage text followed by the base flags.
    pub fn usage(&mut self) {
        let text = format!("{}{}{}", self.tool.usage_text(), BASE_USAGE, DEBUGGER_USAGE);
        self.diag.write_str(&text);
    }

    /// Writes `<name> <version>`; the test version in test mode.
    pub fn print_version(&mut self) {
        let id = self.id_string(true);
        self.diag.write_str(&format!("{id}\n"));
    }

    /// Writes `<name> <version>` to `dst`.  With `chktest`, test mode
    /// substitutes the default version.
    pub fn write_id(&self, dst: &mut dyn Write, chktest: bool) -> io::Result<()> {
        write!(dst, "{}", self.id_string(chktest))
    }

    fn id_string(&self, chktest: bool) -> String {
        let version = if chktest && self.options.test {
            &self.versions.default_version
        } else {
            &self.versions.version
        };
        format!("{} {}", self.identity, version)
    }

    pub fn error(&mut self, message: fmt::Arguments<'_>) {
        self.diag.error(message);
    }

    /// Suppressed when warnings are disabled.
    pub fn warning(&mut self, message: fmt::Arguments<'_>) {
        self.diag.warning(self.options.warn, message);
    }

    pub fn options(&self) -> &CommandOptions {
        &self.options
    }

    pub fn identity(&self) -> &ProgramIdentity {
        &self.identity
    }

    pub fn name(&self) -> &str {
        self.identity.name()
    }

    pub fn tool(&self) -> &T {
        &self.tool
    }

    pub fn tool_mut(&mut self) -> &mut T {
        &mut self.tool
    }

    pub fn table(&self) -> &OptionTable<T> {
        &self.table
    }

    pub fn into_parts(self) -> (T, CommandOptions) {
        (self.tool, self.options)
    }
}
