//! `[site]` configuration.
//!
//! Basic site information: identity, base URL, theme, locale.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

const URL: FieldPath = FieldPath::new("site.url");
const EMAIL: FieldPath = FieldPath::new("site.email");

/// Site metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site name, shown in headers and feeds.
    pub title: String,

    /// Author name, default author of every item.
    pub author: String,

    /// Author email.
    pub email: String,

    /// Public base URL (e.g., "http://www.gregreda.com").
    pub url: Option<String>,

    /// One-line pitch used for the `<title>` of the home page.
    pub tagline: String,

    pub description: String,

    /// IANA timezone name (e.g., "America/Chicago").
    pub timezone: String,

    /// Theme name or path.
    pub theme: String,

    /// Avatar image URL.
    pub avatar: Option<String>,

    /// Language code (e.g., "en"), default language of every item.
    pub language: String,

    /// Bare domain, for analytics snippets.
    pub domain: Option<String>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            email: String::new(),
            url: None,
            tagline: String::new(),
            description: String::new(),
            timezone: "UTC".into(),
            theme: String::new(),
            avatar: None,
            language: "en".into(),
            domain: None,
        }
    }
}

impl SiteInfoConfig {
    /// Parsed base URL with a trailing slash on its path, so relative
    /// URLs join below it instead of replacing its last segment.
    pub fn base_url(&self) -> Option<url::Url> {
        let mut parsed = url::Url::parse(self.url.as_deref()?).ok()?;
        if !parsed.path().ends_with('/') {
            let path = format!("{}/", parsed.path());
            parsed.set_path(&path);
        }
        Some(parsed)
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be a valid URL with http(s) scheme and a host
    /// - `email`, when set, must look like an address
    pub fn validate(&self, feeds_declared: bool, diag: &mut ConfigDiagnostics) {
        if feeds_declared && self.url.is_none() {
            diag.hint(
                URL,
                "feeds are declared but no base URL is set, feed links will be relative",
            );
        }

        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            URL,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            URL,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        URL,
                        format!("invalid URL: {e}"),
                        "use format like https://example.com",
                    );
                }
            }
        }

        if !self.email.is_empty() && !self.email.contains('@') {
            diag.error(EMAIL, format!("'{}' is not an email address", self.email));
        }
    }
}
