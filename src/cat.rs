//! `ktxcat` — concatenate input files (or stdin) into one output file.
//!
//! The smallest useful tool on top of [`OptionEngine`]: inputs and the
//! trailing output file come straight from the engine's positional
//! resolution, so every `@listfile` and stdin rule applies unchanged.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};

use anyhow::Context;

use crate::cli::{HasArg, OptCode, OptionContext, OptionEngine, Tool};
use crate::cli::options::OptionTableBuilder;
use crate::config::{BUFFER_KIB_DEFAULT, BUFFER_KIB_MAX, BUFFER_KIB_MIN, STDIN_MARK};
use crate::util::{open_write_if_not_exists, Clamped};

#[derive(Debug, Clone)]
pub struct CatTool {
    /// Overwrite an existing output file.
    pub force: bool,
    /// Write the writer id as the first output line.
    pub stamp: bool,
    /// Copy buffer size in KiB.
    pub buffer_kib: Clamped<i32>,
}

impl Default for CatTool {
    fn default() -> Self {
        CatTool {
            force: false,
            stamp: false,
            buffer_kib: Clamped::new(BUFFER_KIB_DEFAULT, BUFFER_KIB_MIN, BUFFER_KIB_MAX),
        }
    }
}

impl CatTool {
    pub fn buffer_size(&self) -> usize {
        self.buffer_kib.get() as usize * 1024
    }
}

impl Tool for CatTool {
    fn extend_options(&self, table: OptionTableBuilder<Self>) -> OptionTableBuilder<Self> {
        table
            .short_options("fb:")
            .code("force", HasArg::No, 'f')
            .code("buffer-size", HasArg::Required, 'b')
            .flag("nowarn", |options, _| options.warn = false)
            .flag("stamp", |_, tool| tool.stamp = true)
    }

    fn handle_option(&mut self, ctx: &mut OptionContext<'_>, code: OptCode) -> bool {
        match code.as_char() {
            Some('f') => {
                self.force = true;
                true
            }
            Some('b') => {
                let Some(kib) = ctx.parse_int() else {
                    return false;
                };
                let stored = self.buffer_kib.set(kib);
                if stored != kib {
                    let token = ctx.token();
                    ctx.warning(format_args!("{token} {kib} out of range, using {stored}"));
                }
                true
            }
            _ => false,
        }
    }

    fn usage_text(&self) -> String {
        format!(
            "Usage: ktxcat [options] [@|@@listfile | infile]... outfile\n\
             \n\
             Concatenate the input files, or standard input when none are\n\
             given, into outfile.\n\
             \n\
             \x20 @listfile     Read input filenames from listfile, one per line.\n\
             \x20 @@listfile    As @listfile, relative to the list file's directory.\n\
             \x20 -f, --force   Overwrite outfile if it exists.\n\
             \x20 -b, --buffer-size <KiB>\n\
             \x20               Copy buffer size, {}..={} (default {}).\n\
             \x20     --stamp   Write \"<name> <version>\" as the first line.\n\
             \x20     --nowarn  Silence warnings.\n\
             \x20     --test    Report the stable test version.\n",
            BUFFER_KIB_MIN, BUFFER_KIB_MAX, BUFFER_KIB_DEFAULT
        )
    }
}

/// Result of a concatenation.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CatSummary {
    pub bytes: u64,
    /// Inputs that contributed no bytes.
    pub empty_inputs: Vec<String>,
}

/// Copies every input, in order, to `out`.  `-` reads standard input.
pub fn concatenate(
    infiles: &[String],
    out: &mut dyn Write,
    buffer_size: usize,
) -> anyhow::Result<CatSummary> {
    let mut summary = CatSummary::default();
    for name in infiles {
        let copied = if name == STDIN_MARK {
            copy_from(io::stdin().lock(), out, buffer_size)
                .context("failed copying standard input")?
        } else {
            let file = File::open(name)
                .with_context(|| format!("can't open input file \"{name}\""))?;
            copy_from(file, out, buffer_size)
                .with_context(|| format!("failed copying \"{name}\""))?
        };
        if copied == 0 {
            summary.empty_inputs.push(name.clone());
        }
        summary.bytes += copied;
    }
    Ok(summary)
}

fn copy_from(reader: impl Read, out: &mut dyn Write, buffer_size: usize) -> io::Result<u64> {
    let mut reader = BufReader::with_capacity(buffer_size, reader);
    io::copy(&mut reader, out)
}

/// Does the tool's work once the command line has been processed.
pub fn run(engine: &mut OptionEngine<CatTool>) -> anyhow::Result<CatSummary> {
    let options = engine.options().clone();
    let tool = engine.tool().clone();

    let file = if tool.force {
        File::create(&options.outfile)
    } else {
        open_write_if_not_exists(&options.outfile)
    }
    .with_context(|| format!("can't create output file \"{}\"", options.outfile))?;
    let mut out = BufWriter::new(file);

    if tool.stamp {
        engine.write_id(&mut out, true)?;
        writeln!(out)?;
    }
    let summary = concatenate(&options.infiles, &mut out, tool.buffer_size())?;
    out.flush()
        .with_context(|| format!("failed writing \"{}\"", options.outfile))?;

    for name in &summary.empty_inputs {
        engine.warning(format_args!("input \"{name}\" is empty"));
    }
    Ok(summary)
}
