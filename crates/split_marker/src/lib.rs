// crates/split_marker/src/lib.rs

//! Shared banner defaults used throughout the split‑comment tool‑chain.

/// Comment string used when the host cannot tell us one.
pub const DEFAULT_COMMENT_STR: &str = "//";

/// Column width used when the host has no (numeric) color column.
pub const DEFAULT_N_COL: usize = 80;

/// Filler character for every generated line.
pub const DEFAULT_SPLIT_CHAR: char = '-';

/// Filler characters recognised when parsing an existing banner,
/// in priority order.
pub const SPLIT_CHAR_CANDIDATES: [char; 4] = ['-', '=', '*', '#'];
