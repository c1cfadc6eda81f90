//! Per-type cell rules

use std::sync::LazyLock;

use email_address::EmailAddress;
use email_address::Options;
use regex::Regex;
use url::Url;

use crate::model::types::HexColor;
use crate::settings::ValidationConfig;

pub(crate) const EMAIL_MESSAGE: &str = "{attribute} is not a valid email address.";
pub(crate) const URL_MESSAGE: &str = "{attribute} is not a valid URL.";
pub(crate) const COLOR_MESSAGE: &str = "{attribute} is not a valid hex color value.";

/// A host made of at least two dot-separated labels.
static DOTTED_HOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][\w-]*(\.[A-Za-z0-9][\w-]*)+$").expect("dotted host pattern is valid")
});

/// Plain `local@domain.tld` addresses only: no display text, no domain
/// literals, at least two domain labels.
const EMAIL_OPTIONS: Options = Options {
    minimum_sub_domains: 2,
    allow_domain_literal: false,
    allow_display_text: false,
};

/// Base used to resolve relative URLs.
const RELATIVE_BASE: &str = "http://localhost/";

/// Formats a message template for a table cell.
///
/// Cells have no attribute name of their own, so the `{attribute}`
/// placeholder is pointed at the cell's value instead.
pub(crate) fn format_message(template: &str, value: &str) -> String {
    template
        .replace("{attribute}", "{value}")
        .replace("{value}", value)
}

pub(crate) fn color(text: &str) -> Result<(), String> {
    if HexColor::is_hex_color(text) {
        Ok(())
    } else {
        Err(format_message(COLOR_MESSAGE, text))
    }
}

pub(crate) fn email(text: &str) -> Result<(), String> {
    if is_valid_email(text) {
        Ok(())
    } else {
        Err(format_message(EMAIL_MESSAGE, text))
    }
}

pub(crate) fn url(text: &str, config: &ValidationConfig) -> Result<(), String> {
    if is_valid_url(text, config) {
        Ok(())
    } else {
        Err(format_message(URL_MESSAGE, text))
    }
}

fn is_valid_email(text: &str) -> bool {
    // Quoted local parts are rejected.
    !text.contains('"') && EmailAddress::parse_with_options(text, EMAIL_OPTIONS).is_ok()
}

fn is_valid_url(text: &str, config: &ValidationConfig) -> bool {
    if text.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }

    if text.starts_with("//") {
        // Scheme-relative: needs a host like an absolute URL.
        return config.allow_relative_urls
            && Url::parse(&format!("http:{}", text)).is_ok_and(|url| has_host(&url));
    }

    if text.starts_with(['/', '?', '#']) {
        return config.allow_relative_urls
            && Url::parse(RELATIVE_BASE).is_ok_and(|base| base.join(text).is_ok());
    }

    match Url::parse(text) {
        Ok(url) => config.allows_scheme(url.scheme()) && has_host(&url),
        Err(e) => {
            log::trace!("'{}' is not an absolute URL: {}", text, e);
            false
        }
    }
}

fn has_host(url: &Url) -> bool {
    url.host_str().is_some_and(|host| DOTTED_HOST.is_match(host))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        assert_eq!(format_message(URL_MESSAGE, "x"), "x is not a valid URL.");
        assert_eq!(format_message("{value}!", "y"), "y!");
    }

    #[test]
    fn test_color() {
        assert!(color("#a1b2c3").is_ok());
        assert!(color("#A1B2C3").is_ok());
        assert!(color("#abc").is_err());
        assert!(color("a1b2c3").is_err());
        assert!(color("#a1b2c3d").is_err());
    }

    #[test]
    fn test_email() {
        assert!(email("a@b.com").is_ok());
        assert_eq!(
            email("not-an-email").unwrap_err(),
            "not-an-email is not a valid email address."
        );
    }

    #[test]
    fn test_email_needs_plain_dotted_address() {
        assert!(email("first.last@mail.example.co.uk").is_ok());
        assert!(email("a@b").is_err());
        assert!(email("a@[127.0.0.1]").is_err());
        assert!(email("\"a b\"@example.com").is_err());
        assert!(email("Someone <a@example.com>").is_err());
    }

    #[test]
    fn test_url_needs_dotted_host() {
        let config = ValidationConfig::default();
        assert!(url("https://x", &config).is_err());
        assert!(url("http://localhost", &config).is_err());
        assert!(url("http://a_b/", &config).is_err());
        assert!(url("//cdn/lib.js", &config).is_err());
        assert!(url("http://127.0.0.1:8080/", &config).is_ok());
        assert!(url("https://sub-domain.example.org/x", &config).is_ok());
    }

    #[test]
    fn test_absolute_urls() {
        let config = ValidationConfig::default();
        assert!(url("https://example.com", &config).is_ok());
        assert!(url("http://example.com/path?q=1#top", &config).is_ok());
        assert!(url("ht!tp://x", &config).is_err());
        assert!(url("ftp://example.com", &config).is_err());
        assert!(url("mailto:a@b.com", &config).is_err());
        assert!(url("https://exa mple.com", &config).is_err());
        assert!(url("example.com", &config).is_err());
    }

    #[test]
    fn test_relative_urls() {
        let config = ValidationConfig::default();
        assert!(url("/about", &config).is_ok());
        assert!(url("?page=2", &config).is_ok());
        assert!(url("#section", &config).is_ok());
        assert!(url("//cdn.example.com/lib.js", &config).is_ok());

        let strict = ValidationConfig::default().with_relative_urls(false);
        assert!(url("/about", &strict).is_err());
        assert!(url("//cdn.example.com/lib.js", &strict).is_err());
    }

    #[test]
    fn test_custom_schemes() {
        let config = ValidationConfig::default().with_url_schemes(["ftp"]);
        assert!(url("ftp://files.example.com", &config).is_ok());
        assert!(url("https://example.com", &config).is_err());
    }
}
