//! Content item metadata as handed over by the content-loading stage.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::section::{DefaultsConfig, SiteInfoConfig};
use crate::utils::date::DateTimeUtc;

/// Content kind, selects which pair of path templates applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Dated post.
    #[default]
    Article,
    /// Standalone page (about, contact, ...).
    Page,
}

impl ContentKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Page => "page",
        }
    }
}

/// A single article or page to be placed in the output site.
///
/// Slugs and categories are expected to be URL-safe already; they are
/// substituted into paths without escaping.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentItem {
    #[serde(default)]
    pub kind: ContentKind,
    pub slug: String,
    #[serde(default)]
    pub date: Option<DateTimeUtc>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl ContentItem {
    pub fn article(slug: impl Into<String>) -> Self {
        Self {
            kind: ContentKind::Article,
            slug: slug.into(),
            ..Self::default()
        }
    }

    pub fn page(slug: impl Into<String>) -> Self {
        Self {
            kind: ContentKind::Page,
            slug: slug.into(),
            ..Self::default()
        }
    }

    pub fn with_date(mut self, date: DateTimeUtc) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Fill absent metadata from site-wide defaults.
    ///
    /// Articles fall back to the default category; pages never get one.
    /// Language and author fall back to the site's values when those are set.
    pub fn with_defaults(mut self, site: &SiteInfoConfig, defaults: &DefaultsConfig) -> Self {
        if self.kind == ContentKind::Article && self.category.is_none() {
            self.category = non_empty(&defaults.category);
        }
        if self.lang.is_none() {
            self.lang = non_empty(&site.language);
        }
        if self.author.is_none() {
            self.author = non_empty(&site.author);
        }
        self
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_entry_parsing() {
        let item: ContentItem = serde_json::from_str(
            r#"{"kind": "article", "slug": "my-post", "date": "2014-03-02", "category": "data"}"#,
        )
        .unwrap();
        assert_eq!(item.kind, ContentKind::Article);
        assert_eq!(item.slug, "my-post");
        assert_eq!(item.date, Some(DateTimeUtc::from_ymd(2014, 3, 2)));
        assert_eq!(item.category.as_deref(), Some("data"));
        assert!(item.lang.is_none());
    }

    #[test]
    fn test_manifest_entry_defaults_to_article() {
        let item: ContentItem = serde_json::from_str(r#"{"slug": "x"}"#).unwrap();
        assert_eq!(item.kind, ContentKind::Article);
    }

    #[test]
    fn test_manifest_entry_rejects_unknown_fields() {
        let result = serde_json::from_str::<ContentItem>(r#"{"slug": "x", "tittle": "y"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_with_defaults_article_gets_category() {
        let site = SiteInfoConfig {
            author: "Greg".into(),
            ..SiteInfoConfig::default()
        };
        let defaults = DefaultsConfig::default();

        let item = ContentItem::article("post").with_defaults(&site, &defaults);
        assert_eq!(item.category.as_deref(), Some("misc"));
        assert_eq!(item.lang.as_deref(), Some("en"));
        assert_eq!(item.author.as_deref(), Some("Greg"));
    }

    #[test]
    fn test_with_defaults_keeps_explicit_values() {
        let site = SiteInfoConfig::default();
        let defaults = DefaultsConfig::default();

        let item = ContentItem::article("post")
            .with_category("python")
            .with_lang("de")
            .with_defaults(&site, &defaults);
        assert_eq!(item.category.as_deref(), Some("python"));
        assert_eq!(item.lang.as_deref(), Some("de"));
        // Empty site author is not a value
        assert!(item.author.is_none());
    }

    #[test]
    fn test_with_defaults_page_has_no_category() {
        let item = ContentItem::page("about")
            .with_defaults(&SiteInfoConfig::default(), &DefaultsConfig::default());
        assert!(item.category.is_none());
    }
}
