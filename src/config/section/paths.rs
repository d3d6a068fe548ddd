//! `[paths]` configuration: URL and output path templates.
//!
//! # Example
//!
//! ```toml
//! [paths]
//! article_url = "{date:%Y}/{date:%m}/{date:%d}/{slug}/"
//! article_save_as = "{date:%Y}/{date:%m}/{date:%d}/{slug}/index.html"
//! page_url = "{slug}/"
//! page_save_as = "{slug}/index.html"
//! page_dirs = ["pages"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::page::ContentKind;
use crate::resolve::PathTemplate;

const ARTICLE_URL: &str = "{date:%Y}/{date:%m}/{date:%d}/{slug}/";
const ARTICLE_SAVE_AS: &str = "{date:%Y}/{date:%m}/{date:%d}/{slug}/index.html";
const PAGE_URL: &str = "{slug}/";
const PAGE_SAVE_AS: &str = "{slug}/index.html";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Canonical URL of an article.
    pub article_url: PathTemplate,

    /// Output file of an article.
    pub article_save_as: PathTemplate,

    /// Canonical URL of a page.
    pub page_url: PathTemplate,

    /// Output file of a page.
    pub page_save_as: PathTemplate,

    /// Source directories holding pages (relative to site root).
    pub page_dirs: Vec<PathBuf>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            article_url: builtin(ARTICLE_URL),
            article_save_as: builtin(ARTICLE_SAVE_AS),
            page_url: builtin(PAGE_URL),
            page_save_as: builtin(PAGE_SAVE_AS),
            page_dirs: vec!["pages".into()],
        }
    }
}

fn builtin(source: &str) -> PathTemplate {
    PathTemplate::parse(source).expect("built-in path template is valid")
}

impl PathsConfig {
    /// `(url, save_as)` templates for a content kind.
    pub const fn templates(&self, kind: ContentKind) -> (&PathTemplate, &PathTemplate) {
        match kind {
            ContentKind::Article => (&self.article_url, &self.article_save_as),
            ContentKind::Page => (&self.page_url, &self.page_save_as),
        }
    }

    /// Template syntax is checked during deserialization; this only looks
    /// for pairs that disagree on which fields they use.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (kind, field) in [
            (ContentKind::Article, FieldPath::new("paths.article_save_as")),
            (ContentKind::Page, FieldPath::new("paths.page_save_as")),
        ] {
            let (url, save_as) = self.templates(kind);
            if url.placeholders() != save_as.placeholders() {
                diag.hint(
                    field,
                    format!(
                        "uses different fields than the {} url template (`{}` vs `{}`)",
                        kind.as_str(),
                        save_as,
                        url
                    ),
                );
            }
        }

        for (i, dir) in self.page_dirs.iter().enumerate() {
            if dir.is_absolute() {
                diag.error_with_hint(
                    FieldPath::new("paths.page_dirs"),
                    format!("entry {} `{}` is absolute", i, dir.display()),
                    "page directories are relative to the site root",
                );
            }
        }
    }
}
