//! `[defaults]` configuration.
//!
//! Fallback metadata for content items that do not declare their own.
//!
//! # Example
//!
//! ```toml
//! [defaults]
//! category = "misc"
//! date_format = "%b %d, %Y"
//! pagination = false
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::date::{SUPPORTED_DIRECTIVES, check_format};

const DATE_FORMAT: FieldPath = FieldPath::new("defaults.date_format");
const PAGINATION: FieldPath = FieldPath::new("defaults.pagination");

/// Pagination setting: `false` to disable, or a page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Pagination {
    Flag(bool),
    PerPage(u32),
}

impl Default for Pagination {
    fn default() -> Self {
        Self::Flag(false)
    }
}

impl Pagination {
    /// Items per page, `None` when pagination is off.
    pub const fn per_page(&self) -> Option<u32> {
        match *self {
            Self::PerPage(n) if n > 0 => Some(n),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Category for articles that declare none.
    pub category: String,

    /// Display format for item dates.
    pub date_format: String,

    pub pagination: Pagination,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            category: "misc".into(),
            date_format: "%b %d, %Y".into(),
            pagination: Pagination::default(),
        }
    }
}

impl DefaultsConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Err(directive) = check_format(&self.date_format) {
            diag.error_with_hint(
                DATE_FORMAT,
                format!("unsupported directive `%{directive}`"),
                format!(
                    "supported: {}",
                    SUPPORTED_DIRECTIVES
                        .chars()
                        .map(|c| format!("%{c}"))
                        .collect::<Vec<_>>()
                        .join(" ")
                ),
            );
        }

        match self.pagination {
            Pagination::Flag(true) => diag.error_with_hint(
                PAGINATION,
                "`true` does not say how many items go on a page",
                "set a page size, e.g. pagination = 10",
            ),
            Pagination::PerPage(0) => diag.error_with_hint(
                PAGINATION,
                "page size must be positive",
                "use `false` to disable pagination",
            ),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.defaults.category, "misc");
        assert_eq!(config.defaults.date_format, "%b %d, %Y");
        assert_eq!(config.defaults.pagination.per_page(), None);
    }

    #[test]
    fn test_pagination_parsing() {
        let config = test_parse_config("[defaults]\npagination = 10");
        assert_eq!(config.defaults.pagination, Pagination::PerPage(10));
        assert_eq!(config.defaults.pagination.per_page(), Some(10));

        let config = test_parse_config("[defaults]\npagination = false");
        assert_eq!(config.defaults.pagination, Pagination::Flag(false));
    }

    #[test]
    fn test_validate_pagination() {
        for (value, errors) in [
            (Pagination::Flag(false), 0),
            (Pagination::Flag(true), 1),
            (Pagination::PerPage(0), 1),
            (Pagination::PerPage(5), 0),
        ] {
            let defaults = DefaultsConfig {
                pagination: value,
                ..DefaultsConfig::default()
            };
            let mut diag = ConfigDiagnostics::new();
            defaults.validate(&mut diag);
            assert_eq!(diag.len(), errors, "unexpected result for {value:?}");
        }
    }

    #[test]
    fn test_validate_date_format() {
        let defaults = DefaultsConfig {
            date_format: "%d %Q".into(),
            ..DefaultsConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        defaults.validate(&mut diag);
        assert_eq!(diag.errors()[0].field, DATE_FORMAT);
        assert!(diag.errors()[0].message.contains("%Q"));
    }
}
