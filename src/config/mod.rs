//! Site configuration management for `plume.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── defaults   # [defaults]
//! │   ├── paths      # [paths]
//! │   ├── feed       # [feed]
//! │   ├── plugins    # [plugins]
//! │   └── statics    # [static]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # config file discovery
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Top-level keys
//!
//! | Key        | Purpose                                          |
//! |------------|--------------------------------------------------|
//! | `version`  | Schema version, currently `1`                    |
//! | `nav`      | Navigation links, in render order                |
//! | `social`   | Social profile links, in render order            |
//! | `features` | Optional features, enabled when truthy           |
//!
//! The loaded [`SiteConfig`] is immutable and passed around by reference.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    DefaultsConfig, FeedConfig, PathsConfig, PluginsConfig, SiteInfoConfig, StaticConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::resolve::normalize_links;
use crate::{debug, log};

/// Schema version understood by this build.
pub const CONFIG_VERSION: u32 = 1;

/// Default config file name.
pub const CONFIG_FILE: &str = "plume.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing plume.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    pub version: u32,

    /// Navigation links, raw; see `resolve::normalize_links`.
    pub nav: Vec<toml::Value>,

    /// Social links, raw; see `resolve::normalize_links`.
    pub social: Vec<toml::Value>,

    pub site: SiteInfoConfig,

    pub defaults: DefaultsConfig,

    pub paths: PathsConfig,

    pub feed: FeedConfig,

    pub plugins: PluginsConfig,

    #[serde(rename = "static")]
    pub statics: StaticConfig,

    /// Optional features, see `resolve::is_feature_enabled`.
    pub features: toml::Table,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            version: CONFIG_VERSION,
            nav: Vec::new(),
            social: Vec::new(),
            site: SiteInfoConfig::default(),
            defaults: DefaultsConfig::default(),
            paths: PathsConfig::default(),
            feed: FeedConfig::default(),
            plugins: PluginsConfig::default(),
            statics: StaticConfig::default(),
            features: toml::Table::new(),
        }
    }
}

impl SiteConfig {
    /// Find `config_name` from the working directory upward, then load it.
    pub fn load(config_name: &Path) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let path = find_config_file(&cwd, config_name)
            .ok_or_else(|| ConfigError::NotFound(config_name.to_path_buf()))?;
        Self::from_path(&path)
    }

    /// Load and validate configuration from a file path.
    ///
    /// Unknown keys are reported as warnings, not errors.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = path.to_path_buf();
        config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        config.validate()?;

        debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the whole configuration.
    ///
    /// A wrong schema version or a malformed link entry fails immediately.
    /// Everything else is collected and reported together.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::Version(self.version, CONFIG_VERSION));
        }

        normalize_links("nav", &self.nav)?;
        normalize_links("social", &self.social)?;

        let mut diag = ConfigDiagnostics::new();
        self.site.validate(self.feed.is_declared(), &mut diag);
        self.defaults.validate(&mut diag);
        self.paths.validate(&mut diag);
        self.feed.validate(&mut diag);
        self.plugins.validate(&mut diag);
        self.statics.validate(&mut diag);

        diag.print_notes();
        debug!(
            "config";
            "{} errors, {} warnings, {} hints",
            diag.len(),
            diag.warnings().len(),
            diag.hints().len()
        );
        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with the schema version set.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("version = 1\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
