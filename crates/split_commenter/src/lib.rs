// crates/split_commenter/src/lib.rs

//! Section-banner commands over a line buffer.
//!
//! `make_split_comment` turns the cursor line into
//! `// ------- label -------`; `make_split_comment3` additionally frames it
//! with two plain splitter lines. Settings come from any
//! [`ConfigProvider`] and fall back to `//` and 80 columns.

mod buffer;
mod commands;
pub mod config;

pub use banner_config::ConfigProvider;
pub use buffer::LineBuffer;
pub use commands::{build_lines, make_split_comment, make_split_comment3};
pub use config::{AppConfig, BannerShape};
