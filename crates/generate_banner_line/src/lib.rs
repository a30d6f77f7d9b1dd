// crates/generate_banner_line/src/lib.rs

use split_marker::{DEFAULT_COMMENT_STR, DEFAULT_N_COL, DEFAULT_SPLIT_CHAR};

/// Everything needed to lay out a banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BannerSettings {
    /// One-line comment string, written verbatim and followed by a space.
    pub comment_str: String,
    /// Target width of every generated line, in characters.
    pub n_col: usize,
    /// Filler character.
    pub split_char: char,
}

impl Default for BannerSettings {
    fn default() -> Self {
        Self {
            comment_str: DEFAULT_COMMENT_STR.to_string(),
            n_col: DEFAULT_N_COL,
            split_char: DEFAULT_SPLIT_CHAR,
        }
    }
}

/// The two lines a command can write back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BannerLines {
    pub content_line: String,
    pub splitter_line: String,
}

/// Builds `// ------- content -------` padded to `n_col` characters.
///
/// The left run gets half of the free space rounded down, the right run the
/// rest. When `content` does not fit, both runs are empty and the line is
/// longer than `n_col`. Empty `content` gives the plain splitter line.
pub fn generate_content_line(comment_str: &str, content: &str, n_col: usize, split_char: char) -> String {
    if content.is_empty() {
        return generate_splitter_line(comment_str, n_col, split_char);
    }

    let prefix = format!("{} ", comment_str);
    let content = format!(" {} ", content);
    let n_splitter = free_columns(n_col, char_len(&prefix) + char_len(&content));
    let n_left = n_splitter / 2;
    let n_right = n_splitter - n_left;

    format!(
        "{}{}{}{}",
        prefix,
        repeat_char(split_char, n_left),
        content,
        repeat_char(split_char, n_right)
    )
}

/// Builds `// ------------------` padded to `n_col` characters.
pub fn generate_splitter_line(comment_str: &str, n_col: usize, split_char: char) -> String {
    let prefix = format!("{} ", comment_str);
    let n_splitter = free_columns(n_col, char_len(&prefix));
    format!("{}{}", prefix, repeat_char(split_char, n_splitter))
}

/// Generates the content line and the splitter line for one command run.
pub fn generate_banner_lines(settings: &BannerSettings, content: &str) -> BannerLines {
    BannerLines {
        content_line: generate_content_line(&settings.comment_str, content, settings.n_col, settings.split_char),
        splitter_line: generate_splitter_line(&settings.comment_str, settings.n_col, settings.split_char),
    }
}

// Widths are counted in chars so multi-byte labels line up with ASCII ones.
fn char_len(s: &str) -> usize {
    s.chars().count()
}

// A negative remainder clamps to zero filler.
fn free_columns(n_col: usize, used: usize) -> usize {
    n_col.saturating_sub(used)
}

fn repeat_char(c: char, n: usize) -> String {
    std::iter::repeat(c).take(n).collect()
}
