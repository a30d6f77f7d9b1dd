// crates/split_commenter/src/config.rs

use std::path::PathBuf;

use banner_config::{EnvConfig, LayeredConfig, StaticConfig};

/// Which command to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerShape {
    /// One content line.
    Single,
    /// Splitter, content, splitter.
    Framed,
}

/// Runtime configuration composed from CLI flags.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub file: Option<PathBuf>,      // None == stdin
    pub row: usize,
    pub shape: BannerShape,
    pub text: Option<String>,       // None == extract from the cursor line
    pub comment_str: Option<String>,
    pub n_col: Option<usize>,
    pub in_place: bool,
    pub verbose: bool,
}

impl AppConfig {
    /// Flags first, then the `SPLIT_COMMENT_*` environment.
    pub fn provider(&self) -> LayeredConfig<StaticConfig, EnvConfig> {
        let flags = StaticConfig {
            comment_str: self.comment_str.clone(),
            n_col: self.n_col,
        };
        LayeredConfig::new(flags, EnvConfig::new())
    }
}
