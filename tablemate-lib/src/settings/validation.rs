//! Validation configuration

use serde::Deserialize;
use serde::Serialize;

/// Configuration for cell validation rules.
///
/// # Example
///
/// ```
/// use tablemate_lib::settings::ValidationConfig;
///
/// let config = ValidationConfig::default()
///     .with_url_schemes(["https"])
///     .with_relative_urls(false);
/// assert!(!config.allows_scheme("http"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationConfig {
    /// URL schemes accepted in `url` cells, compared case-insensitively.
    ///
    /// Default: `http`, `https`
    pub url_schemes: Vec<String>,

    /// Whether `url` cells may hold root-relative, query or fragment URLs.
    ///
    /// Default: `true`
    pub allow_relative_urls: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            url_schemes: vec!["http".to_string(), "https".to_string()],
            allow_relative_urls: true,
        }
    }
}

impl ValidationConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the accepted URL schemes.
    pub fn with_url_schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.url_schemes = schemes.into_iter().map(Into::into).collect();
        self
    }

    /// Sets whether relative URLs are accepted.
    pub fn with_relative_urls(mut self, allow: bool) -> Self {
        self.allow_relative_urls = allow;
        self
    }

    /// Returns `true` if the scheme is accepted.
    pub fn allows_scheme(&self, scheme: &str) -> bool {
        self.url_schemes.iter().any(|s| s.eq_ignore_ascii_case(scheme))
    }
}
