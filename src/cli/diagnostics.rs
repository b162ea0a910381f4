//! Diagnostic stream shared by the engine and the owning tool.
//!
//! Every error line is `<name>: <message>` and every warning line is
//! `<name> warning! <message>`.  Output goes to stderr unless another sink is
//! injected; [`SharedSink`] lets callers keep a handle on what was written.

use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;

pub struct Diagnostics {
    name: String,
    sink: Box<dyn Write>,
}

impl Diagnostics {
    pub fn stderr() -> Self {
        Diagnostics::new(io::stderr())
    }

    pub fn new(sink: impl Write + 'static) -> Self {
        Diagnostics {
            name: String::new(),
            sink: Box::new(sink),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }

    /// Writes `<name>: <message>`.
    pub fn error(&mut self, message: fmt::Arguments<'_>) {
        let _ = writeln!(self.sink, "{}: {}", self.name, message);
    }

    /// Writes `<name> warning! <message>` when `enabled`.
    pub fn warning(&mut self, enabled: bool, message: fmt::Arguments<'_>) {
        if enabled {
            let _ = writeln!(self.sink, "{} warning! {}", self.name, message);
        }
    }

    /// Writes `text` unprefixed.
    pub fn write_str(&mut self, text: &str) {
        let _ = self.sink.write_all(text.as_bytes());
        let _ = self.sink.flush();
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics").field("name", &self.name).finish()
    }
}

/// Cloneable in-memory sink; all clones share one buffer.
#[derive(Debug, Clone, Default)]
pub struct SharedSink(Rc<RefCell<Vec<u8>>>);

impl SharedSink {
    pub fn new() -> Self {
        SharedSink::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
