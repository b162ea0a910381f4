//! Output-file helpers.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

/// Creates `path` for writing, failing with [`io::ErrorKind::AlreadyExists`]
/// if it is already there.  The check and the creation are one atomic step.
pub fn open_write_if_not_exists(path: impl AsRef<Path>) -> io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
}
