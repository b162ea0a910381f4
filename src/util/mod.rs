//! Helpers used by the engine and by tools.
//!
//! - [`file_list`] — `@listfile` / `@@listfile` expansion
//! - [`file_io`]   — create-only output files
//! - [`clamped`]   — range-limited option values

pub mod clamped;
pub mod file_io;
pub mod file_list;

pub use clamped::Clamped;
pub use file_io::open_write_if_not_exists;
pub use file_list::{load_file_list, load_file_list_into, FileListError};
