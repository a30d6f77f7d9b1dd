// crates/banner_config/src/traits.rs

use anyhow::Result;

/// Source of the host settings a banner depends on.
///
/// Either lookup may fail (missing setting, unparsable value); callers go
/// through [`crate::api`] which turns failures into defaults.
pub trait ConfigProvider {
    /// The one-line comment string of the current buffer, e.g. `//` or `#`.
    fn comment_str(&self) -> Result<String>;

    /// The column the banner should end at.
    fn n_col(&self) -> Result<usize>;
}
