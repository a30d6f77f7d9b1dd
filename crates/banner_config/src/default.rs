// crates/banner_config/src/default.rs

use std::env;

use anyhow::{anyhow, Context, Result};

use crate::traits::ConfigProvider;

/// Environment variable holding the one-line comment string.
pub const COMMENT_STR_ENV_VAR: &str = "SPLIT_COMMENT_STR";

/// Environment variable holding the column width (an editor's color column).
pub const COLUMN_ENV_VAR: &str = "SPLIT_COMMENT_COLUMN";

/// Reads the settings from environment variables.
#[derive(Clone, Debug)]
pub struct EnvConfig {
    comment_var: String,
    column_var: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        Self::with_vars(COMMENT_STR_ENV_VAR, COLUMN_ENV_VAR)
    }

    /// Uses custom variable names instead of the `SPLIT_COMMENT_*` pair.
    pub fn with_vars(comment_var: &str, column_var: &str) -> Self {
        Self {
            comment_var: comment_var.to_string(),
            column_var: column_var.to_string(),
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigProvider for EnvConfig {
    fn comment_str(&self) -> Result<String> {
        env::var(&self.comment_var).with_context(|| format!("{} is not set", self.comment_var))
    }

    fn n_col(&self) -> Result<usize> {
        let raw = env::var(&self.column_var).with_context(|| format!("{} is not set", self.column_var))?;
        parse_n_col(&raw).with_context(|| format!("{} is not a column number", self.column_var))
    }
}

/// Fixed values, typically taken from command-line flags. `None` counts as
/// a missing setting.
#[derive(Clone, Debug, Default)]
pub struct StaticConfig {
    pub comment_str: Option<String>,
    pub n_col: Option<usize>,
}

impl ConfigProvider for StaticConfig {
    fn comment_str(&self) -> Result<String> {
        self.comment_str
            .clone()
            .ok_or_else(|| anyhow!("no comment string given"))
    }

    fn n_col(&self) -> Result<usize> {
        self.n_col.ok_or_else(|| anyhow!("no column width given"))
    }
}

/// Asks `primary` first and falls through to `fallback`, per setting.
#[derive(Clone, Debug)]
pub struct LayeredConfig<A, B> {
    pub primary: A,
    pub fallback: B,
}

impl<A, B> LayeredConfig<A, B> {
    pub fn new(primary: A, fallback: B) -> Self {
        Self { primary, fallback }
    }
}

impl<A: ConfigProvider, B: ConfigProvider> ConfigProvider for LayeredConfig<A, B> {
    fn comment_str(&self) -> Result<String> {
        self.primary.comment_str().or_else(|_| self.fallback.comment_str())
    }

    fn n_col(&self) -> Result<usize> {
        self.primary.n_col().or_else(|_| self.fallback.n_col())
    }
}

/// Parses a column setting. Lists such as `80,120` are rejected.
fn parse_n_col(raw: &str) -> Result<usize> {
    let trimmed = raw.trim();
    trimmed
        .parse::<usize>()
        .with_context(|| format!("invalid column value '{}'", trimmed))
}
