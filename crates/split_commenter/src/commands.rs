// crates/split_commenter/src/commands.rs

use banner_config::{resolve_settings, ConfigProvider};
use extract_banner_content::extract_banner_content;
use generate_banner_line::{generate_banner_lines, BannerLines};
use tracing::debug;

use crate::buffer::LineBuffer;

/// Builds the content and splitter lines for one command run.
///
/// An explicit `arg` is used verbatim as the label (an empty one yields a
/// plain splitter); without it the label is recovered from `current_line`.
pub fn build_lines(provider: &dyn ConfigProvider, arg: Option<&str>, current_line: &str) -> BannerLines {
    let settings = resolve_settings(provider);
    debug!(
        "comment string {:?}, {} columns",
        settings.comment_str, settings.n_col
    );

    let content = match arg {
        Some(text) => text.to_string(),
        None => extract_banner_content(current_line, &settings.comment_str),
    };
    debug!("banner content {:?}", content);

    generate_banner_lines(&settings, &content)
}

/// Replaces the cursor line with a single banner line.
pub fn make_split_comment(buffer: &mut LineBuffer, provider: &dyn ConfigProvider, arg: Option<&str>) {
    let lines = build_lines(provider, arg, buffer.current_line());
    buffer.set_current_line(lines.content_line);
}

/// Replaces the cursor line with splitter / content / splitter.
pub fn make_split_comment3(buffer: &mut LineBuffer, provider: &dyn ConfigProvider, arg: Option<&str>) {
    let BannerLines {
        content_line,
        splitter_line,
    } = build_lines(provider, arg, buffer.current_line());
    buffer.set_current_line(splitter_line.clone());
    buffer.insert_after_current([content_line, splitter_line]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use banner_config::StaticConfig;

    fn config(comment_str: &str, n_col: usize) -> StaticConfig {
        StaticConfig {
            comment_str: Some(comment_str.to_string()),
            n_col: Some(n_col),
        }
    }

    #[test]
    fn test_build_lines_with_argument() {
        let lines = build_lines(&config("//", 40), Some("Section"), "ignored");
        assert_eq!(lines.content_line, "// -------------- Section --------------");
        assert_eq!(lines.splitter_line, format!("// {}", "-".repeat(37)));
    }

    #[test]
    fn test_build_lines_extracts_current_line() {
        let lines = build_lines(&config("#", 20), None, "  # ==== Setup ====");
        assert_eq!(lines.content_line, "# ----- Setup ------");
    }

    #[test]
    fn test_build_lines_empty_argument_is_splitter() {
        let lines = build_lines(&config("//", 20), Some(""), "// -- Old --");
        assert_eq!(lines.content_line, lines.splitter_line);
    }

    #[test]
    fn test_build_lines_defaults() {
        let lines = build_lines(&StaticConfig::default(), Some("x"), "");
        assert_eq!(lines.content_line.chars().count(), 80);
        assert!(lines.content_line.starts_with("// "));
    }

    #[test]
    fn test_make_split_comment() {
        let mut buffer = LineBuffer::from_text("fn a() {}\n// Helpers\nfn b() {}", 2).unwrap();
        make_split_comment(&mut buffer, &config("//", 20), None);
        assert_eq!(
            buffer.lines(),
            ["fn a() {}", "// ---- Helpers ----", "fn b() {}"]
        );
    }

    #[test]
    fn test_make_split_comment3() {
        let mut buffer = LineBuffer::from_text("a\n// Helpers\nb", 2).unwrap();
        make_split_comment3(&mut buffer, &config("//", 20), None);
        assert_eq!(
            buffer.lines(),
            [
                "a",
                "// -----------------",
                "// ---- Helpers ----",
                "// -----------------",
                "b",
            ]
        );
        assert_eq!(buffer.row(), 2);
    }

    #[test]
    fn test_make_split_comment3_on_last_line() {
        let mut buffer = LineBuffer::from_text("Tail", 1).unwrap();
        make_split_comment3(&mut buffer, &config("#", 10), None);
        assert_eq!(buffer.lines(), ["# --------", "# - Tail -", "# --------"]);
    }
}
