//! `getopt_long`-style scanner over an argument vector.
//!
//! [`ArgParser::getopt`] returns one option code per call and `None` once
//! the first non-option argument is reached.  Afterwards
//! [`ArgParser::optind`] is the index of the first positional argument.
//!
//! Scanning rules:
//! - `--name`, `--name=value` and `--name value` select long options.
//! - A single-dash token whose body names a long option (`-name value`) is
//!   also treated as long; IDEs append options in that form.
//! - `-x`, `-xvalue` and `-x value` select short options; value-less short
//!   options may be grouped (`-hv`).
//! - `--` ends option scanning and is consumed; a lone `-` is positional.

use log::trace;

use crate::cli::options::{CommandOptions, HasArg, OptCode, OptionAction, OptionTable};

#[derive(Debug)]
pub struct ArgParser<'a> {
    argv: &'a [String],
    optind: usize,
    /// Byte offset of the next short option inside `argv[optind - 1]`;
    /// zero when not inside a group.
    nextchar: usize,
    optarg: Option<String>,
    /// The token that produced the last option code.
    current: String,
}

impl<'a> ArgParser<'a> {
    /// `argv[0]` is the program path and is never scanned.
    pub fn new(argv: &'a [String]) -> Self {
        ArgParser {
            argv,
            optind: 1,
            nextchar: 0,
            optarg: None,
            current: String::new(),
        }
    }

    pub fn argv(&self) -> &'a [String] {
        self.argv
    }

    /// Index of the next argument to scan; after `getopt` returns `None`,
    /// the index of the first positional argument.
    pub fn optind(&self) -> usize {
        self.optind.min(self.argv.len())
    }

    /// Value attached to the last option, if any.
    pub fn optarg(&self) -> Option<&str> {
        self.optarg.as_deref()
    }

    /// The option token (e.g. `--foo` or `-x`) that produced the last code.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Scans the next option.
    ///
    /// Table-bound flags have their setter applied here and yield
    /// [`OptCode::FLAG`].  A missing required value yields
    /// [`OptCode::MISSING`]; an unrecognised token yields
    /// [`OptCode::UNKNOWN`].
    pub fn getopt<T>(
        &mut self,
        table: &OptionTable<T>,
        options: &mut CommandOptions,
        tool: &mut T,
    ) -> Option<OptCode> {
        self.optarg = None;
        let argv = self.argv;

        if self.nextchar == 0 {
            let arg = argv.get(self.optind)?;
            if !arg.starts_with('-') || arg.len() == 1 {
                return None;
            }
            self.optind += 1;
            if arg == "--" {
                return None;
            }
            if let Some(body) = arg.strip_prefix("--") {
                return Some(self.long_option(arg, body, table, options, tool));
            }
            let body = &arg[1..];
            if body.chars().nth(1).is_some() && table.find_long(long_name(body)).is_some() {
                return Some(self.long_option(arg, body, table, options, tool));
            }
            self.nextchar = 1;
        }

        Some(self.short_option(table))
    }

    fn long_option<T>(
        &mut self,
        arg: &str,
        body: &str,
        table: &OptionTable<T>,
        options: &mut CommandOptions,
        tool: &mut T,
    ) -> OptCode {
        let (name, inline) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };
        self.current = arg.split_once('=').map_or(arg, |(head, _)| head).to_owned();

        let Some(spec) = table.find_long(name) else {
            trace!("unknown long option {arg}");
            return OptCode::UNKNOWN;
        };

        match spec.has_arg {
            HasArg::No => {
                if inline.is_some() {
                    return OptCode::UNKNOWN;
                }
            }
            HasArg::Required => match inline {
                Some(value) => self.optarg = Some(value.to_owned()),
                None => match self.argv.get(self.optind) {
                    Some(value) => {
                        self.optarg = Some(value.clone());
                        self.optind += 1;
                    }
                    None => return OptCode::MISSING,
                },
            },
            HasArg::Optional => self.optarg = inline.map(str::to_owned),
        }

        match spec.action {
            OptionAction::Set(setter) => {
                setter(options, tool);
                OptCode::FLAG
            }
            OptionAction::Code(code) => code,
        }
    }

    fn short_option<T>(&mut self, table: &OptionTable<T>) -> OptCode {
        let argv = self.argv;
        let arg = &argv[self.optind - 1];
        let Some(c) = arg[self.nextchar..].chars().next() else {
            self.nextchar = 0;
            return OptCode::UNKNOWN;
        };
        self.nextchar += c.len_utf8();
        self.current = format!("-{c}");
        let rest = &arg[self.nextchar..];

        let Some(has_arg) = table.find_short(c) else {
            if rest.is_empty() {
                self.nextchar = 0;
            }
            return OptCode::UNKNOWN;
        };

        match has_arg {
            HasArg::No => {
                if rest.is_empty() {
                    self.nextchar = 0;
                }
            }
            HasArg::Required => {
                self.nextchar = 0;
                if !rest.is_empty() {
                    self.optarg = Some(rest.to_owned());
                } else if let Some(value) = argv.get(self.optind) {
                    self.optarg = Some(value.clone());
                    self.optind += 1;
                } else {
                    return OptCode::MISSING;
                }
            }
            HasArg::Optional => {
                self.nextchar = 0;
                if !rest.is_empty() {
                    self.optarg = Some(rest.to_owned());
                }
            }
        }
        OptCode::from(c)
    }
}

fn long_name(body: &str) -> &str {
    body.split_once('=').map_or(body, |(name, _)| name)
}
