// crates/extract_banner_content/src/lib.rs

use split_marker::SPLIT_CHAR_CANDIDATES;

/// Pulls the label out of an already decorated banner line.
///
/// `"  // ---- content ----   "` becomes `"content"`. The comment string is
/// compared literally, so prefixes such as `#`, `(*` or `--` need no escaping.
/// A line holding nothing but decoration yields an empty string.
///
/// # Arguments
///
/// * `raw_line` - The line as it currently sits in the buffer.
/// * `comment_str` - The one-line comment string of the buffer (e.g. `//`).
pub fn extract_banner_content(raw_line: &str, comment_str: &str) -> String {
    // '  // ---- content ----   ' -> '// ---- content ----'
    let line = raw_line.trim();
    // -> '---- content ----'
    let line = line.strip_prefix(comment_str).unwrap_or(line).trim_start();

    // -> ' content '
    let line = match detect_split_char(line) {
        Some(split_char) => line
            .trim_start_matches(split_char)
            .trim_end_matches(split_char),
        None => line,
    };

    // -> 'content'
    line.trim().to_string()
}

/// Returns the splitter character `text` starts with, checking the
/// candidates in priority order.
pub fn detect_split_char(text: &str) -> Option<char> {
    SPLIT_CHAR_CANDIDATES
        .iter()
        .copied()
        .find(|&candidate| text.starts_with(candidate))
}
