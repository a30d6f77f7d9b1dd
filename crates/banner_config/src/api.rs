// crates/banner_config/src/api.rs

use generate_banner_line::BannerSettings;
use split_marker::{DEFAULT_COMMENT_STR, DEFAULT_N_COL, DEFAULT_SPLIT_CHAR};
use tracing::debug;

use crate::traits::ConfigProvider;

/// Comment string from `provider`, or `//` when it cannot give one.
pub fn resolve_comment_str(provider: &dyn ConfigProvider) -> String {
    provider.comment_str().unwrap_or_else(|err| {
        debug!("using default comment string {:?}: {:#}", DEFAULT_COMMENT_STR, err);
        DEFAULT_COMMENT_STR.to_string()
    })
}

/// Column width from `provider`, or 80 when it cannot give one.
pub fn resolve_n_col(provider: &dyn ConfigProvider) -> usize {
    provider.n_col().unwrap_or_else(|err| {
        debug!("using default column width {}: {:#}", DEFAULT_N_COL, err);
        DEFAULT_N_COL
    })
}

/// Resolves everything a command needs. Never fails.
pub fn resolve_settings(provider: &dyn ConfigProvider) -> BannerSettings {
    BannerSettings {
        comment_str: resolve_comment_str(provider),
        n_col: resolve_n_col(provider),
        split_char: DEFAULT_SPLIT_CHAR,
    }
}
