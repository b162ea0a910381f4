//! Hook run when `--ld` asks for a debugger before the tool starts working.
//!
//! The engine only calls the hook; what "attach a debugger" means is up to
//! the binary.  [`NoDebugger`] is the engine default.  On Unix,
//! [`StopForDebugger`] prints the pid and stops the process with `SIGSTOP`
//! so a debugger can attach and continue it.

use crate::cli::identity::ProgramIdentity;

pub trait DebuggerHook {
    /// Returns `false` when no debugger could be launched.
    fn launch(&mut self, identity: &ProgramIdentity) -> bool;
}

impl<F> DebuggerHook for F
where
    F: FnMut(&ProgramIdentity) -> bool,
{
    fn launch(&mut self, identity: &ProgramIdentity) -> bool {
        self(identity)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoDebugger;

impl DebuggerHook for NoDebugger {
    fn launch(&mut self, _identity: &ProgramIdentity) -> bool {
        false
    }
}

#[cfg(unix)]
#[derive(Debug, Default, Clone, Copy)]
pub struct StopForDebugger;

#[cfg(unix)]
impl DebuggerHook for StopForDebugger {
    fn launch(&mut self, identity: &ProgramIdentity) -> bool {
        use nix::sys::signal::{raise, Signal};

        eprintln!(
            "{}: waiting for debugger, attach to pid {} and continue",
            identity,
            std::process::id()
        );
        raise(Signal::SIGSTOP).is_ok()
    }
}
