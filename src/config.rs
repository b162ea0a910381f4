// config.rs — Compile-time configuration constants.
//
// Everything here is fixed at build time; tools override behaviour through
// their own options, never through these values.

// Input filename meaning "read standard input".  Substituted when a tool
// allows stdin and no inputs were given; never valid alongside other inputs.
pub const STDIN_MARK: &str = "-";

// Option code of the absorbed `NSDocumentRevisionsDebugMode` option.
// Chosen above any character code a tool would use for a short option.
pub const ABSORBED_OPTION_CODE: u32 = 10_000;

// Version reported by `--version` and written by `write_id`.
pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

// Version reported instead of VERSION in `--test` mode, so test harnesses
// can compare output across releases.
pub const DEFAULT_VERSION: &str = "v4.0.__default__";

// Copy buffer size for ktxcat, in KiB, and the range `-b` is clamped to.
pub const BUFFER_KIB_DEFAULT: i32 = 64;
pub const BUFFER_KIB_MIN: i32 = 1;
pub const BUFFER_KIB_MAX: i32 = 1024;
