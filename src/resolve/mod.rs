//! Settings resolver.
//!
//! Turns the declarative settings into concrete values:
//!
//! | Module     | Purpose                                          |
//! |------------|--------------------------------------------------|
//! | `template` | Path templates, `resolve_path` / `resolve_url`   |
//! | `links`    | `normalize_links` for `nav` and `social`         |
//! | `feature`  | `is_feature_enabled` over `[features]`           |
//! | `error`    | `MissingFieldError`, `ConfigShapeError`          |
//!
//! [`Resolver`] bundles them over one loaded [`SiteConfig`].

mod error;
mod feature;
mod links;
mod template;

pub use error::{ConfigShapeError, MissingFieldError, TemplateError};
pub use feature::{is_feature_enabled, is_truthy};
pub use links::{LinkEntry, normalize_links};
pub use template::{PathTemplate, Placeholder, resolve_path, resolve_url};

use rayon::prelude::*;

use crate::config::SiteConfig;
use crate::debug;
use crate::page::{ContentItem, ContentRoute};

/// Read-only view over a loaded config with its link lists normalized.
///
/// Construction fails on the first malformed link entry, so a `Resolver`
/// only exists for a well-shaped config.
#[derive(Debug)]
pub struct Resolver<'a> {
    config: &'a SiteConfig,
    nav: Vec<LinkEntry>,
    social: Vec<LinkEntry>,
}

impl<'a> Resolver<'a> {
    pub fn new(config: &'a SiteConfig) -> Result<Self, ConfigShapeError> {
        let nav = normalize_links("nav", &config.nav)?;
        let social = normalize_links("social", &config.social)?;
        debug!("resolve"; "{} nav and {} social links", nav.len(), social.len());

        Ok(Self {
            config,
            nav,
            social,
        })
    }

    pub const fn config(&self) -> &'a SiteConfig {
        self.config
    }

    pub fn nav(&self) -> &[LinkEntry] {
        &self.nav
    }

    pub fn social(&self) -> &[LinkEntry] {
        &self.social
    }

    pub fn is_enabled(&self, feature: &str) -> bool {
        is_feature_enabled(self.config, feature)
    }

    /// Resolve URL, output path and absolute URL for one item.
    ///
    /// Absent metadata is first filled from site defaults (see
    /// [`ContentItem::with_defaults`]); whatever is still missing fails.
    pub fn route(&self, item: &ContentItem) -> Result<ContentRoute, MissingFieldError> {
        let item = item
            .clone()
            .with_defaults(&self.config.site, &self.config.defaults);
        let (url_template, save_template) = self.config.paths.templates(item.kind);

        let url = resolve_url(url_template, &item)?;
        let save_as = resolve_path(save_template, &item)?;
        let full_url = self
            .config
            .site
            .base_url()
            .and_then(|base| base.join(&url).ok())
            .map(String::from);
        let display_date = item
            .date
            .map(|date| date.format(&self.config.defaults.date_format));

        debug!("resolve"; "{} `{}` -> {}", item.kind.as_str(), item.slug, save_as);

        Ok(ContentRoute {
            kind: item.kind,
            slug: item.slug,
            url,
            save_as,
            full_url,
            display_date,
        })
    }

    /// Resolve many items independently, results in input order.
    pub fn routes(&self, items: &[ContentItem]) -> Vec<Result<ContentRoute, MissingFieldError>> {
        items.par_iter().map(|item| self.route(item)).collect()
    }

    /// Output path of the Atom feed for `tag`, if tag feeds are configured.
    pub fn tag_feed_path(&self, tag: &str) -> Option<String> {
        self.config.feed.tag_path(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::utils::date::DateTimeUtc;

    fn gregreda() -> SiteConfig {
        test_parse_config(
            r#"
nav = [["About", "/about/"]]
social = [{ platform = "github", user = "gjreda" }]

[site]
url = "http://www.gregreda.com"
language = "en"

[feed]
tag_atom = "feeds/tag/%s.atom.xml"
"#,
        )
    }

    #[test]
    fn test_route_article() {
        let config = gregreda();
        let resolver = Resolver::new(&config).unwrap();
        let item = ContentItem::article("my-post").with_date(DateTimeUtc::from_ymd(2014, 3, 2));

        let route = resolver.route(&item).unwrap();
        assert_eq!(route.url, "2014/03/02/my-post/");
        assert_eq!(route.save_as, "2014/03/02/my-post/index.html");
        assert_eq!(
            route.full_url.as_deref(),
            Some("http://www.gregreda.com/2014/03/02/my-post/")
        );
        assert_eq!(route.display_date.as_deref(), Some("Mar 02, 2014"));
    }

    #[test]
    fn test_route_page() {
        let config = gregreda();
        let resolver = Resolver::new(&config).unwrap();

        let route = resolver.route(&ContentItem::page("about")).unwrap();
        assert_eq!(route.url, "about/");
        assert_eq!(route.save_as, "about/index.html");
        assert!(route.display_date.is_none());
    }

    #[test]
    fn test_route_without_site_url() {
        let config = test_parse_config("");
        let resolver = Resolver::new(&config).unwrap();

        let route = resolver.route(&ContentItem::page("about")).unwrap();
        assert!(route.full_url.is_none());
    }

    #[test]
    fn test_route_joins_subdirectory_base() {
        let config = test_parse_config("[site]\nurl = \"https://example.github.io/blog\"");
        let resolver = Resolver::new(&config).unwrap();

        let route = resolver.route(&ContentItem::page("about")).unwrap();
        assert_eq!(
            route.full_url.as_deref(),
            Some("https://example.github.io/blog/about/")
        );
    }

    #[test]
    fn test_route_article_uses_default_category() {
        let config = test_parse_config(
            "[paths]\narticle_url = \"{category}/{slug}/\"\narticle_save_as = \"{category}/{slug}.html\"",
        );
        let resolver = Resolver::new(&config).unwrap();

        let route = resolver.route(&ContentItem::article("post")).unwrap();
        assert_eq!(route.url, "misc/post/");
        assert_eq!(route.save_as, "misc/post.html");
    }

    #[test]
    fn test_route_undated_article_gets_no_fallback_date() {
        let config = test_parse_config("[defaults]\ncategory = \"misc\"");
        let resolver = Resolver::new(&config).unwrap();

        let err = resolver.route(&ContentItem::article("draft")).unwrap_err();
        assert_eq!(err.field, Placeholder::Date);
        assert_eq!(err.slug, "draft");
    }

    #[test]
    fn test_route_page_missing_category() {
        let config = test_parse_config(
            "[paths]\npage_url = \"{category}/{slug}/\"\npage_save_as = \"{category}/{slug}/index.html\"",
        );
        let resolver = Resolver::new(&config).unwrap();

        let err = resolver.route(&ContentItem::page("about")).unwrap_err();
        assert_eq!(err.field, Placeholder::Category);
    }

    #[test]
    fn test_routes_isolate_failures() {
        let config = gregreda();
        let resolver = Resolver::new(&config).unwrap();
        let items = vec![
            ContentItem::article("one").with_date(DateTimeUtc::from_ymd(2014, 3, 2)),
            ContentItem::article("undated"),
            ContentItem::page("about"),
        ];

        let results = resolver.routes(&items);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().slug, "one");
        assert_eq!(results[1].as_ref().unwrap_err().field, Placeholder::Date);
        assert_eq!(results[2].as_ref().unwrap().save_as, "about/index.html");
    }

    #[test]
    fn test_links_are_normalized_on_construction() {
        let config = gregreda();
        let resolver = Resolver::new(&config).unwrap();
        assert_eq!(resolver.nav()[0].label(), "About");
        assert_eq!(resolver.social()[0].url(), "https://github.com/gjreda");
    }

    #[test]
    fn test_malformed_nav_fails_construction() {
        let config = test_parse_config("nav = [[]]");
        let err = Resolver::new(&config).unwrap_err();
        assert_eq!(err.list, "nav");
        assert_eq!(err.index, 0);
    }

    #[test]
    fn test_tag_feed_path() {
        let config = gregreda();
        let resolver = Resolver::new(&config).unwrap();
        assert_eq!(
            resolver.tag_feed_path("python").as_deref(),
            Some("feeds/tag/python.atom.xml")
        );
    }
}
