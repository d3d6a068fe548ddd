//! `[feed]` configuration: Atom feed output paths.
//!
//! ```toml
//! [feed]
//! all_atom = "feeds/all.atom.xml"
//! tag_atom = "feeds/tag/%s.atom.xml"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::url::normalize_relative;

const TAG_ATOM: FieldPath = FieldPath::new("feed.tag_atom");

/// Slot in `tag_atom` replaced by the tag name.
const TAG_SLOT: &str = "%s";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Feed with every article.
    pub all_atom: Option<String>,

    /// Per-tag feed pattern, `%s` is the tag.
    pub tag_atom: Option<String>,
}

impl FeedConfig {
    pub const fn is_declared(&self) -> bool {
        self.all_atom.is_some() || self.tag_atom.is_some()
    }

    /// Normalized output path of the all-articles feed.
    pub fn all_path(&self) -> Option<String> {
        self.all_atom.as_deref().map(normalize_relative)
    }

    /// Normalized output path of the feed for `tag`.
    pub fn tag_path(&self, tag: &str) -> Option<String> {
        self.tag_atom
            .as_deref()
            .map(|pattern| normalize_relative(&pattern.replacen(TAG_SLOT, tag, 1)))
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(pattern) = &self.tag_atom {
            let slots = pattern.matches(TAG_SLOT).count();
            if slots != 1 {
                diag.error_with_hint(
                    TAG_ATOM,
                    format!("expected exactly one `{TAG_SLOT}` slot, found {slots}"),
                    "e.g. \"feeds/tag/%s.atom.xml\"",
                );
            }
        }
    }
}
