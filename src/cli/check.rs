//! `check` command: load the config and summarize what it resolves to.

use anyhow::Result;

use super::common::count;
use crate::log;
use crate::page::{ContentItem, ContentKind};
use crate::resolve::{Resolver, is_truthy};
use crate::utils::date::DateTimeUtc;
use crate::utils::url::is_external_link;

/// Slug used to preview the path templates.
const SAMPLE_SLUG: &str = "sample-post";

/// Lines reported by `check`.
#[derive(Debug, Default)]
struct Summary {
    lines: Vec<String>,
    warnings: Vec<String>,
}

/// Print a summary of the validated config.
///
/// Loading already failed on every hard error, so this only reports.
pub fn run_check(resolver: &Resolver) -> Result<()> {
    let summary = summarize(resolver);
    for line in &summary.lines {
        log!("check"; "{}", line);
    }
    for warning in &summary.warnings {
        log!("warning"; "{}", warning);
    }
    Ok(())
}

fn summarize(resolver: &Resolver) -> Summary {
    let config = resolver.config();
    let site = &config.site;
    let mut summary = Summary::default();
    let lines = &mut summary.lines;

    lines.push(format!(
        "{} ({})",
        display_or(&site.title, "untitled site"),
        config.config_path.display()
    ));
    if let Some(base) = site.base_url() {
        lines.push(format!("base url {base}"));
    }

    for kind in [ContentKind::Article, ContentKind::Page] {
        let (url, save_as) = config.paths.templates(kind);
        lines.push(format!("{} url `{url}`, saved as `{save_as}`", kind.as_str()));
    }
    let sample = ContentItem::article(SAMPLE_SLUG).with_date(DateTimeUtc::from_ymd(2014, 3, 2));
    match resolver.route(&sample) {
        Ok(route) => lines.push(format!("e.g. {} -> {}", route.url, route.save_as)),
        Err(err) => summary.warnings.push(err.to_string()),
    }

    lines.push(format!(
        "{}, {}",
        count(resolver.nav().len(), "nav link"),
        count(resolver.social().len(), "social link")
    ));
    for link in resolver.nav().iter().chain(resolver.social()) {
        if !link.url().starts_with('/') && !is_external_link(link.url()) {
            summary.warnings.push(format!(
                "link `{}` has a relative url `{}`",
                link.label(),
                link.url()
            ));
        }
    }

    if let Some(path) = config.feed.all_path() {
        lines.push(format!("atom feed at {path}"));
    }
    if let Some(path) = resolver.tag_feed_path("{tag}") {
        lines.push(format!("tag feeds at {path}"));
    }

    lines.push(match config.defaults.pagination.per_page() {
        Some(n) => format!("{} per page", count(n as usize, "item")),
        None => "pagination off".to_owned(),
    });

    let plugins = &config.plugins.enabled;
    if !plugins.is_empty() {
        lines.push(format!("{}: {}", count(plugins.len(), "plugin"), plugins.join(", ")));
    }

    let mut extras: Vec<_> = config.statics.extra.keys().collect();
    extras.sort();
    for source in extras {
        lines.push(format!("static {source} -> {}", config.statics.output_path(source)));
    }

    let enabled = config.features.values().filter(|v| is_truthy(v)).count();
    lines.push(format!("{enabled} of {} enabled", count(config.features.len(), "feature")));

    summary
}

fn display_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}
