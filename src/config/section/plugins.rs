//! `[plugins]` configuration.
//!
//! Plugins are declared here for the generator; nothing in this crate runs
//! them.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

const ENABLED: FieldPath = FieldPath::new("plugins.enabled");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginsConfig {
    /// Directories searched for plugins (relative to site root).
    pub paths: Vec<PathBuf>,

    /// Plugin names in load order.
    pub enabled: Vec<String>,
}

impl PluginsConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let mut seen = FxHashSet::default();
        for name in &self.enabled {
            if name.trim().is_empty() {
                diag.error(ENABLED, "plugin name is empty");
            } else if !seen.insert(name.as_str()) {
                diag.warn(ENABLED, format!("plugin `{name}` is listed more than once"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_order_preserved() {
        let config = test_parse_config(
            "[plugins]\npaths = [\"../pelican-plugins\"]\nenabled = [\"assets\", \"liquid_tags.notebook\", \"render_math\"]",
        );
        assert_eq!(config.plugins.paths, vec![PathBuf::from("../pelican-plugins")]);
        assert_eq!(
            config.plugins.enabled,
            ["assets", "liquid_tags.notebook", "render_math"]
        );
    }

    #[test]
    fn test_validate_duplicates_warn() {
        let plugins = PluginsConfig {
            enabled: vec!["assets".into(), "assets".into()],
            ..PluginsConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        plugins.validate(&mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_validate_empty_name() {
        let plugins = PluginsConfig {
            enabled: vec![" ".into()],
            ..PluginsConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        plugins.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
