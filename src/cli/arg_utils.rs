// arg_utils.rs — path and number helpers used while reading the command line.

/// Returns the last path component of `path`, handling both `/` and `\` separators.
pub fn last_name_from_path(path: &str) -> &str {
    let after_slash = match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    };
    match after_slash.rfind('\\') {
        Some(pos) => &after_slash[pos + 1..],
        None => after_slash,
    }
}

/// Removes everything from the last `.` onwards.
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(pos) => &name[..pos],
        None => name,
    }
}

/// Parses an integer option value the way C `strtol(s, &end, 0)` does.
///
/// Leading whitespace and a sign are accepted; `0x`/`0X` selects hex, a
/// leading `0` octal, anything else decimal.  Parsing stops at the first
/// character that is not a digit of the base.  Values outside `i32` saturate.
///
/// Returns `Err(rest)` only when the parsed value is `0` and unparsed text
/// remains, so `"12abc"` yields `12` while `"abc"` and `"0x"` are rejected.
/// An empty string parses as `0`.
pub fn parse_int(s: &str) -> Result<i32, &str> {
    let trimmed = s.trim_start();
    let bytes = trimmed.as_bytes();
    let mut i = 0usize;

    let negative = match bytes.first() {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    let radix: u32 = if bytes.get(i) == Some(&b'0')
        && matches!(bytes.get(i + 1), Some(b'x' | b'X'))
        && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit)
    {
        i += 2;
        16
    } else if bytes.get(i) == Some(&b'0') {
        8
    } else {
        10
    };

    let digits_start = i;
    let mut value: i64 = 0;
    while let Some(digit) = bytes.get(i).and_then(|&b| (b as char).to_digit(radix)) {
        value = value.saturating_mul(radix as i64).saturating_add(digit as i64);
        i += 1;
    }

    // No digits at all: strtol leaves the end pointer at the start of `s`.
    let rest = if i == digits_start { s } else { &trimmed[i..] };

    if negative {
        value = -value;
    }
    let value = value.clamp(i32::MIN as i64, i32::MAX as i64) as i32;

    if value == 0 && !rest.is_empty() {
        Err(rest)
    } else {
        Ok(value)
    }
}
