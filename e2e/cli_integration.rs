// e2e/cli_integration.rs — black-box tests of the `ktxcat` binary
//
// Runs the built binary with std::process::Command and checks exit codes,
// output files and the diagnostic text on stderr.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Locate the `ktxcat` binary produced by Cargo.
fn ktxcat_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_ktxcat") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("ktxcat");
    p
}

fn ktxcat(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(ktxcat_bin())
        .args(args)
        .current_dir(dir.path())
        .stdin(Stdio::null())
        .output()
        .expect("failed to run ktxcat")
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

// ── 1. Concatenation ──────────────────────────────────────────────────────────

#[test]
fn test_cli_concatenates_inputs_in_order() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "alpha\n").unwrap();
    fs::write(dir.path().join("b.txt"), "beta\n").unwrap();

    let out = ktxcat(&dir, &["a.txt", "b.txt", "out.txt"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(
        fs::read_to_string(dir.path().join("out.txt")).unwrap(),
        "alpha\nbeta\n"
    );
}

#[test]
fn test_cli_reads_stdin_without_inputs() {
    let dir = TempDir::new().unwrap();
    let mut child = Command::new(ktxcat_bin())
        .arg("out.txt")
        .current_dir(dir.path())
        .stdin(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn ktxcat");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"from stdin\n")
        .unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(
        fs::read_to_string(dir.path().join("out.txt")).unwrap(),
        "from stdin\n"
    );
}

#[test]
fn test_cli_relative_list_file() {
    let dir = TempDir::new().unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("one.txt"), "1").unwrap();
    fs::write(sub.join("two.txt"), "2").unwrap();
    fs::write(sub.join("list.txt"), "one.txt\r\n\r\n  two.txt  \r\n").unwrap();

    let out = ktxcat(&dir, &["@@sub/list.txt", "out.txt"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(fs::read_to_string(dir.path().join("out.txt")).unwrap(), "12");
}

#[test]
fn test_cli_empty_input_warns() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("empty.txt"), "").unwrap();

    let out = ktxcat(&dir, &["empty.txt", "out.txt"]);
    assert!(out.status.success());
    assert_eq!(stderr(&out), "ktxcat warning! input \"empty.txt\" is empty\n");

    let out = ktxcat(&dir, &["--nowarn", "-f", "empty.txt", "out.txt"]);
    assert!(out.status.success());
    assert_eq!(stderr(&out), "");
}

// ── 2. Help and version ───────────────────────────────────────────────────────

#[test]
fn test_cli_help_exits_zero() {
    let dir = TempDir::new().unwrap();
    let out = ktxcat(&dir, &["--help"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stderr(&out);
    assert!(text.starts_with("Usage: ktxcat"));
    assert!(text.contains("--version"));
}

#[test]
fn test_cli_version_in_test_mode() {
    let dir = TempDir::new().unwrap();
    let out = ktxcat(&dir, &["--test", "-v"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stderr(&out), "ktxcat v4.0.__default__\n");
}

#[test]
fn test_cli_version_reports_package_version() {
    let dir = TempDir::new().unwrap();
    let out = ktxcat(&dir, &["--version"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        stderr(&out),
        format!("ktxcat v{}\n", env!("CARGO_PKG_VERSION"))
    );
}

// ── 3. Exit codes on bad command lines ───────────────────────────────────────

#[test]
fn test_cli_missing_option_value_exits_zero() {
    let dir = TempDir::new().unwrap();
    let out = ktxcat(&dir, &["--buffer-size"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stderr(&out).starts_with("ktxcat: missing required option argument.\n"));
}

#[test]
fn test_cli_unknown_option_exits_one() {
    let dir = TempDir::new().unwrap();
    let out = ktxcat(&dir, &["--frobnicate", "a", "b"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).starts_with("ktxcat: unrecognized option \"--frobnicate\".\n"));
}

#[test]
fn test_cli_stdin_among_many_exits_one() {
    let dir = TempDir::new().unwrap();
    let out = ktxcat(&dir, &["a.txt", "-", "out.txt"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).starts_with("ktxcat: cannot use stdin as one among many inputs.\n"));
}

#[test]
fn test_cli_no_outfile_exits_one() {
    let dir = TempDir::new().unwrap();
    let out = ktxcat(&dir, &[]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stderr(&out), "ktxcat: need an output file\n");
}

#[test]
fn test_cli_missing_list_file_exits_one() {
    let dir = TempDir::new().unwrap();
    let out = ktxcat(&dir, &["@nolist.txt", "out.txt"]);
    assert_eq!(out.status.code(), Some(1));
    let text = stderr(&out);
    assert!(text.starts_with("ktxcat: failed opening filename list: \"nolist.txt\""));
    assert!(!text.contains("Usage:"));
}

// ── 4. Output file handling ───────────────────────────────────────────────────

#[test]
fn test_cli_refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("in.txt"), "new").unwrap();
    fs::write(dir.path().join("out.txt"), "old").unwrap();

    let out = ktxcat(&dir, &["in.txt", "out.txt"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).starts_with("ktxcat: can't create output file \"out.txt\""));
    assert_eq!(fs::read_to_string(dir.path().join("out.txt")).unwrap(), "old");

    let out = ktxcat(&dir, &["-f", "in.txt", "out.txt"]);
    assert!(out.status.success());
    assert_eq!(fs::read_to_string(dir.path().join("out.txt")).unwrap(), "new");
}

#[test]
fn test_cli_stamp_writes_id_line() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("in.txt"), "body\n").unwrap();
    let out = ktxcat(&dir, &["--test", "--stamp", "in.txt", "out.txt"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(
        fs::read_to_string(dir.path().join("out.txt")).unwrap(),
        "ktxcat v4.0.__default__\nbody\n"
    );
}

#[test]
fn test_cli_missing_input_exits_one() {
    let dir = TempDir::new().unwrap();
    let out = ktxcat(&dir, &["absent.txt", "out.txt"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).starts_with("ktxcat: can't open input file \"absent.txt\""));
}
