// crates/split_commenter/src/buffer.rs

use anyhow::{bail, Result};

/// The lines of a document plus the row the cursor sits on.
///
/// Rows are 1-based, the way editors report them. The line terminator and
/// the presence of a final newline are kept so untouched lines are written
/// back byte for byte.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
    row: usize,
    line_ending: &'static str,
    trailing_newline: bool,
}

impl LineBuffer {
    /// Fails when `row` does not point at one of `lines`.
    pub fn new(lines: Vec<String>, row: usize) -> Result<Self> {
        if row == 0 || row > lines.len() {
            bail!("Line {} is out of range (buffer has {} lines)", row, lines.len());
        }
        Ok(Self {
            lines,
            row,
            line_ending: "\n",
            trailing_newline: true,
        })
    }

    /// Splits `text` into lines. Empty text is a buffer with one empty line.
    ///
    /// The first line terminator found (`\r\n` or `\n`) is used for the whole
    /// buffer when it is written back.
    pub fn from_text(text: &str, row: usize) -> Result<Self> {
        let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        let mut buffer = Self::new(lines, row)?;
        buffer.line_ending = detect_line_ending(text);
        buffer.trailing_newline = text.ends_with('\n');
        Ok(buffer)
    }

    /// Joins the lines back with the original terminator; a final newline
    /// is written only if the source text had one.
    pub fn to_text(&self) -> String {
        let mut text = self.lines.join(self.line_ending);
        if self.trailing_newline {
            text.push_str(self.line_ending);
        }
        text
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn current_line(&self) -> &str {
        &self.lines[self.row - 1]
    }

    pub(crate) fn set_current_line(&mut self, line: String) {
        let idx = self.row - 1;
        self.lines[idx] = line;
    }

    /// Inserts `new_lines` right below the cursor row; the cursor does not move.
    pub(crate) fn insert_after_current<I>(&mut self, new_lines: I)
    where
        I: IntoIterator<Item = String>,
    {
        let idx = self.row;
        self.lines.splice(idx..idx, new_lines);
    }
}

fn detect_line_ending(text: &str) -> &'static str {
    match text.find('\n') {
        Some(idx) if text[..idx].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}
