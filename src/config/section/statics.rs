//! `[static]` configuration: copied directories and output overrides.
//!
//! ```toml
//! [static]
//! paths = ["images", "code", "notebooks", "extra"]
//!
//! [static.extra]
//! "extra/robots.txt" = "robots.txt"
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::url::normalize_relative;

const EXTRA: FieldPath = FieldPath::new("static.extra");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticConfig {
    /// Directories copied verbatim into the output (relative to content dir).
    pub paths: Vec<PathBuf>,

    /// Source file → output path overrides.
    pub extra: FxHashMap<String, String>,
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            paths: vec!["images".into()],
            extra: FxHashMap::default(),
        }
    }
}

impl StaticConfig {
    /// Output path for a static source file, after overrides.
    pub fn output_path(&self, source: &str) -> String {
        let source = normalize_relative(source);
        match self.extra.get(&source) {
            Some(target) => normalize_relative(target),
            None => source,
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let mut sources: Vec<_> = self.extra.keys().collect();
        sources.sort();

        for source in sources {
            let covered = self
                .paths
                .iter()
                .any(|dir| std::path::Path::new(source).starts_with(dir));
            if !covered {
                diag.warn(
                    EXTRA,
                    format!("`{source}` is outside every static path and will not be copied"),
                );
            }
            if self.extra[source].trim().is_empty() {
                diag.error(EXTRA, format!("`{source}` has an empty target"));
            }
        }
    }
}
