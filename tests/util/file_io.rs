// Integration tests for util/file_io.rs — create-only output files

use std::fs;
use std::io::{ErrorKind, Write};

use ktxapp::util::open_write_if_not_exists;
use tempfile::TempDir;

#[test]
fn second_open_fails_with_already_exists() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.ktx2");
    let mut first = open_write_if_not_exists(&path).unwrap();
    first.write_all(b"first").unwrap();
    drop(first);

    let err = open_write_if_not_exists(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    assert_eq!(fs::read(&path).unwrap(), b"first");
}

#[test]
fn missing_parent_directory_is_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no/such/dir/out.ktx2");
    let err = open_write_if_not_exists(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
