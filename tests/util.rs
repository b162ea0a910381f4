#[path = "util/clamped.rs"]
mod clamped;
#[path = "util/file_io.rs"]
mod file_io;
