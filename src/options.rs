//! Configuration options for content normalization.
//!
//! The `Options` struct is handed to a `DataProcessor` (or `DataService`) at
//! construction and never changes afterwards.

use crate::url_utils;
use crate::{Error, Result};

/// Configuration options for content normalization.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_jss_data::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     host: "https://cdn.example.com".to_string(),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Asset host prefix.
    ///
    /// Prepended verbatim to the relative `src` extracted from a GraphQL
    /// `ImageField` rendering. No slash is added or removed, so a host ending
    /// in `/` combined with a root-relative path yields `//`.
    ///
    /// Default: `"/"`
    pub host: String,

    /// Skip GraphQL fields whose name starts with `__`.
    ///
    /// Sitecore exposes its system fields (`__Created`, `__Sortorder`, ...)
    /// alongside template fields; they are rarely wanted in content output.
    ///
    /// Default: `true`
    pub skip_system_fields: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            host: "/".to_string(),
            skip_system_fields: true,
        }
    }
}

impl Options {
    /// Check that the configured values are usable.
    ///
    /// The host may be empty, root-relative (`/media`) or an absolute
    /// `http(s)` URL with a host.
    pub fn validate(&self) -> Result<()> {
        let host = self.host.trim();

        if host.is_empty() || host.starts_with('/') {
            return Ok(());
        }

        let (is_abs, _) = url_utils::is_absolute_url(host);
        if is_abs {
            Ok(())
        } else {
            Err(Error::InvalidOption(format!(
                "host must be root-relative or an absolute http(s) URL, got {host:?}"
            )))
        }
    }
}
