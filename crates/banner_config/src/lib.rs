// crates/banner_config/src/lib.rs

pub mod traits;
pub mod default;
pub mod api;

pub use api::{resolve_comment_str, resolve_n_col, resolve_settings};
pub use default::{EnvConfig, LayeredConfig, StaticConfig, COLUMN_ENV_VAR, COMMENT_STR_ENV_VAR};
pub use traits::ConfigProvider;
