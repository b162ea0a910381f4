//! Binary entry point for the `ktxcat` tool.
//!
//! # Control flow
//!
//! 1. [`OptionEngine::process_command_line`] parses flags and resolves the
//!    input files and the trailing output file.
//! 2. Help, version and command-line errors end the process with the
//!    engine's exit code.
//! 3. [`run`] concatenates the inputs; any I/O failure exits 1.

use ktxapp::cat::{run, CatTool};
use ktxapp::cli::{OptionEngine, OutfilePolicy, StdinPolicy};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let argv: Vec<String> = std::env::args().collect();
    let mut engine = OptionEngine::new(CatTool::default());
    #[cfg(unix)]
    {
        engine = engine.with_debugger_hook(ktxapp::cli::debugger::StopForDebugger);
    }

    if let Err(stop) = engine.process_command_line(&argv, StdinPolicy::Allow, OutfilePolicy::Last) {
        stop.exit();
    }

    // Already reported by the engine as "need an output file".
    if engine.options().outfile.is_empty() {
        std::process::exit(1);
    }

    let exit_code = match run(&mut engine) {
        Ok(summary) => {
            log::debug!("wrote {} bytes", summary.bytes);
            0
        }
        Err(e) => {
            engine.error(format_args!("{e:#}"));
            1
        }
    };
    std::process::exit(exit_code);
}
