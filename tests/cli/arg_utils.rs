// Integration tests for cli/arg_utils.rs — path and number helpers
//
//   - `last_name_from_path` splits on both `/` and `\`
//   - `strip_extension` drops the final `.suffix`
//   - `parse_int` follows `strtol(s, &end, 0)`: prefix-selected base,
//     partial parses accepted, zero-with-leftovers rejected

use ktxapp::cli::arg_utils::{last_name_from_path, parse_int, strip_extension};

// ─────────────────────────────────────────────────────────────────────────────
// last_name_from_path / strip_extension
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn last_name_unix_path() {
    assert_eq!(last_name_from_path("/usr/local/bin/toktx"), "toktx");
}

#[test]
fn last_name_windows_path() {
    assert_eq!(last_name_from_path("C:\\KTX\\bin\\toktx.exe"), "toktx.exe");
}

#[test]
fn last_name_mixed_separators() {
    assert_eq!(last_name_from_path("C:/KTX\\bin/ktx2check.exe"), "ktx2check.exe");
}

#[test]
fn last_name_without_separator() {
    assert_eq!(last_name_from_path("ktxinfo"), "ktxinfo");
}

#[test]
fn strip_extension_only_last_suffix() {
    assert_eq!(strip_extension("ktx2ktx2.exe"), "ktx2ktx2");
    assert_eq!(strip_extension("a.tar.gz"), "a.tar");
    assert_eq!(strip_extension("toktx"), "toktx");
}

// ─────────────────────────────────────────────────────────────────────────────
// parse_int
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn parse_int_bases() {
    assert_eq!(parse_int("42"), Ok(42));
    assert_eq!(parse_int("0x2A"), Ok(42));
    assert_eq!(parse_int("052"), Ok(42));
    assert_eq!(parse_int("0"), Ok(0));
}

#[test]
fn parse_int_signs_and_whitespace() {
    assert_eq!(parse_int("  -7"), Ok(-7));
    assert_eq!(parse_int("+7"), Ok(7));
}

#[test]
fn parse_int_accepts_trailing_text_after_nonzero() {
    assert_eq!(parse_int("12abc"), Ok(12));
}

#[test]
fn parse_int_rejects_zero_with_leftovers() {
    assert_eq!(parse_int("abc"), Err("abc"));
    assert!(parse_int("0q").is_err());
}

#[test]
fn parse_int_saturates() {
    assert_eq!(parse_int("99999999999"), Ok(i32::MAX));
    assert_eq!(parse_int("-99999999999"), Ok(i32::MIN));
}
