//! `resolve` and `routes` commands.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Serialize;

use super::args::{ItemArgs, OutputArgs};
use super::common::{count, write_json};
use crate::log;
use crate::page::{ContentItem, ContentKind, ContentRoute};
use crate::resolve::{MissingFieldError, Placeholder, Resolver};
use crate::utils::url::is_url_safe;

/// Resolve a single item given on the command line.
pub fn run_resolve(resolver: &Resolver, item: &ItemArgs, output: &OutputArgs) -> Result<()> {
    let item = item.to_item();
    warn_unsafe_slug(&item);

    let route = resolver.route(&item)?;
    write_json(&route, output, "resolve")
}

/// One manifest entry in `routes` output.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum RouteRecord {
    Resolved(ContentRoute),
    Failed {
        kind: ContentKind,
        slug: String,
        error: String,
        field: Placeholder,
    },
}

impl RouteRecord {
    fn new(item: &ContentItem, result: Result<ContentRoute, MissingFieldError>) -> Self {
        match result {
            Ok(route) => Self::Resolved(route),
            Err(err) => Self::Failed {
                kind: item.kind,
                slug: item.slug.clone(),
                error: err.to_string(),
                field: err.field,
            },
        }
    }
}

/// Resolve every item of a JSON manifest.
///
/// Items fail independently. All records are written, then the command
/// fails if any item could not be resolved.
pub fn run_routes(resolver: &Resolver, manifest: &Path, output: &OutputArgs) -> Result<()> {
    let items = read_manifest(manifest)?;
    items.iter().for_each(warn_unsafe_slug);

    let records: Vec<_> = items
        .iter()
        .zip(resolver.routes(&items))
        .map(|(item, result)| RouteRecord::new(item, result))
        .collect();

    let mut failed = 0;
    for record in &records {
        if let RouteRecord::Failed { error, .. } = record {
            log!("error"; "{}", error);
            failed += 1;
        }
    }

    write_json(&records, output, "routes")?;

    if failed > 0 {
        bail!("{} of {} could not be resolved", failed, count(items.len(), "item"));
    }
    log!("routes"; "resolved {}", count(items.len(), "item"));
    Ok(())
}

fn read_manifest(path: &Path) -> Result<Vec<ContentItem>> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read manifest from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest `{}`", path.display()))?
    };

    parse_manifest(&content)
}

fn parse_manifest(content: &str) -> Result<Vec<ContentItem>> {
    serde_json::from_str(content).context("manifest must be a JSON array of content items")
}

fn warn_unsafe_slug(item: &ContentItem) {
    if !is_url_safe(&item.slug) {
        log!("warning"; "slug `{}` is not url-safe", item.slug);
    }
}
