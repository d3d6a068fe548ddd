//! Feature flags from the `[features]` table.
//!
//! ```toml
//! [features]
//! sitemap = true
//! twitter_cards = true
//! google_analytics = "UA-34295039-1"
//! google_adsense = false
//! ```

use toml::Value;

use crate::config::SiteConfig;

/// Whether `feature` is declared and truthy.
pub fn is_feature_enabled(config: &SiteConfig, feature: &str) -> bool {
    config.features.get(feature).is_some_and(is_truthy)
}

/// Truthiness of a setting value.
///
/// Enabled: `true`, non-empty string, non-zero number, any datetime,
/// non-empty array or table. Everything else is disabled.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Boolean(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Integer(i) => *i != 0,
        Value::Float(f) => *f != 0.0,
        Value::Datetime(_) => true,
        Value::Array(items) => !items.is_empty(),
        Value::Table(table) => !table.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_absent_feature_is_disabled() {
        let config = test_parse_config("");
        assert!(!is_feature_enabled(&config, "sitemap"));
    }

    #[test]
    fn test_string_feature() {
        let config = test_parse_config(
            "[features]\ngoogle_analytics = \"UA-34295039-1\"\ndisqus_sitename = \"\"",
        );
        assert!(is_feature_enabled(&config, "google_analytics"));
        assert!(!is_feature_enabled(&config, "disqus_sitename"));
    }

    #[test]
    fn test_bool_feature() {
        let config = test_parse_config("[features]\ntwitter_cards = true\ngoogle_adsense = false");
        assert!(is_feature_enabled(&config, "twitter_cards"));
        assert!(!is_feature_enabled(&config, "google_adsense"));
    }

    #[test]
    fn test_structured_feature() {
        let config = test_parse_config(
            "[features]\nsitemap = { format = \"xml\" }\nmenu = []\nempty = {}\nlimit = 0\nratio = 0.5",
        );
        assert!(is_feature_enabled(&config, "sitemap"));
        assert!(!is_feature_enabled(&config, "menu"));
        assert!(!is_feature_enabled(&config, "empty"));
        assert!(!is_feature_enabled(&config, "limit"));
        assert!(is_feature_enabled(&config, "ratio"));
    }

    #[test]
    fn test_is_truthy_datetime() {
        let table: toml::Table = toml::from_str("when = 2014-03-02").unwrap();
        assert!(is_truthy(&table["when"]));
    }
}
