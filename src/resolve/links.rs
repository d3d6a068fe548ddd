//! Navigation and social link normalization.
//!
//! Accepted entry shapes:
//!
//! ```toml
//! nav = [
//!     ["About", "/about/"],                        # label/url pair
//!     { label = "Archive", url = "/archive/" },    # explicit table
//! ]
//! social = [
//!     { platform = "github", user = "gjreda" },    # url derived
//!     { platform = "linkedin", url = "http://linkedin.com/in/gjreda" },
//! ]
//! ```

use serde::Serialize;
use toml::Value;

use super::ConfigShapeError;

/// Platforms whose profile URL can be derived from a username.
const PROFILE_URLS: &[(&str, &str)] = &[
    ("twitter", "https://twitter.com/"),
    ("github", "https://github.com/"),
    ("lastfm", "https://www.last.fm/user/"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub platform: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    pub url: String,
}

/// A normalized link, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LinkEntry {
    Nav(NavLink),
    Social(SocialLink),
}

impl LinkEntry {
    /// Display text: the nav label or the platform name.
    pub fn label(&self) -> &str {
        match self {
            Self::Nav(link) => &link.label,
            Self::Social(link) => &link.platform,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Self::Nav(link) => &link.url,
            Self::Social(link) => &link.url,
        }
    }
}

/// Normalize raw link entries from the config list named `list`.
///
/// Preserves order and count; the first malformed entry aborts.
pub fn normalize_links(list: &str, raw: &[Value]) -> Result<Vec<LinkEntry>, ConfigShapeError> {
    raw.iter()
        .enumerate()
        .map(|(index, value)| {
            normalize_entry(value).map_err(|reason| ConfigShapeError {
                list: list.to_owned(),
                index,
                reason,
            })
        })
        .collect()
}

fn normalize_entry(value: &Value) -> Result<LinkEntry, String> {
    match value {
        Value::Array(items) => normalize_pair(items),
        Value::Table(table) if table.contains_key("platform") => normalize_social(table),
        Value::Table(table) if table.contains_key("label") => normalize_nav_table(table),
        Value::Table(_) => Err("expected a table with `label` or `platform`".into()),
        other => Err(format!(
            "expected [label, url] or a table, found {}",
            other.type_str()
        )),
    }
}

fn normalize_pair(items: &[Value]) -> Result<LinkEntry, String> {
    match items {
        [Value::String(label), Value::String(url)] => Ok(LinkEntry::Nav(NavLink {
            label: required(label, "label")?,
            url: required(url, "url")?,
        })),
        [_, _] => Err("expected [label, url] as two strings".into()),
        _ => Err(format!(
            "expected [label, url], found {} element{}",
            items.len(),
            if items.len() == 1 { "" } else { "s" }
        )),
    }
}

fn normalize_nav_table(table: &toml::Table) -> Result<LinkEntry, String> {
    reject_unknown_keys(table, &["label", "url"])?;
    Ok(LinkEntry::Nav(NavLink {
        label: string_key(table, "label")?.ok_or("missing `label`")?,
        url: string_key(table, "url")?.ok_or("missing `url`")?,
    }))
}

fn normalize_social(table: &toml::Table) -> Result<LinkEntry, String> {
    reject_unknown_keys(table, &["platform", "user", "url"])?;

    let platform = string_key(table, "platform")?.ok_or("missing `platform`")?;
    let user = string_key(table, "user")?;
    let url = match (string_key(table, "url")?, &user) {
        (Some(url), _) => url,
        (None, Some(user)) => profile_url(&platform, user).ok_or_else(|| {
            format!("no profile url known for platform `{platform}`, set `url`")
        })?,
        (None, None) => return Err("social link needs `url` or `user`".into()),
    };

    Ok(LinkEntry::Social(SocialLink {
        platform,
        user,
        url,
    }))
}

/// Derive a profile URL for well-known platforms.
pub fn profile_url(platform: &str, user: &str) -> Option<String> {
    let platform = platform.to_ascii_lowercase();
    PROFILE_URLS
        .iter()
        .find(|(name, _)| *name == platform)
        .map(|(_, base)| format!("{base}{user}"))
}

fn string_key(table: &toml::Table, key: &str) -> Result<Option<String>, String> {
    match table.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => required(s, key).map(Some),
        Some(other) => Err(format!("`{key}` must be a string, found {}", other.type_str())),
    }
}

fn required(value: &str, key: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        Err(format!("`{key}` is empty"))
    } else {
        Ok(value.to_owned())
    }
}

fn reject_unknown_keys(table: &toml::Table, known: &[&str]) -> Result<(), String> {
    match table.keys().find(|key| !known.contains(&key.as_str())) {
        Some(key) => Err(format!("unknown key `{key}`")),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parse `entries = [...]` and return the array.
    fn entries(src: &str) -> Vec<Value> {
        let table: toml::Table = toml::from_str(&format!("entries = {src}")).unwrap();
        match table.get("entries") {
            Some(Value::Array(items)) => items.clone(),
            _ => panic!("not an array"),
        }
    }

    #[test]
    fn test_pair_becomes_nav_link() {
        let links = normalize_links("nav", &entries(r#"[["About", "/about"]]"#)).unwrap();
        assert_eq!(
            links,
            vec![LinkEntry::Nav(NavLink {
                label: "About".into(),
                url: "/about".into(),
            })]
        );
    }

    #[test]
    fn test_mixed_shapes_preserve_order_and_count() {
        let raw = entries(
            r#"[
                ["About", "/about/"],
                { platform = "github", user = "gjreda" },
                { label = "Archive", url = "/archive/" },
                { platform = "linkedin", url = "http://linkedin.com/in/gjreda" },
            ]"#,
        );
        let links = normalize_links("social", &raw).unwrap();

        assert_eq!(links.len(), raw.len());
        let labels: Vec<_> = links.iter().map(LinkEntry::label).collect();
        assert_eq!(labels, ["About", "github", "Archive", "linkedin"]);
        assert_eq!(links[1].url(), "https://github.com/gjreda");
        assert_eq!(links[3].url(), "http://linkedin.com/in/gjreda");
    }

    #[test]
    fn test_social_explicit_url_wins() {
        let raw = entries(
            r#"[{ platform = "twitter", user = "gjreda", url = "https://x.com/gjreda" }]"#,
        );
        let links = normalize_links("social", &raw).unwrap();
        assert_eq!(
            links[0],
            LinkEntry::Social(SocialLink {
                platform: "twitter".into(),
                user: Some("gjreda".into()),
                url: "https://x.com/gjreda".into(),
            })
        );
    }

    #[test]
    fn test_profile_url() {
        assert_eq!(
            profile_url("lastfm", "gjreda").as_deref(),
            Some("https://www.last.fm/user/gjreda")
        );
        assert_eq!(
            profile_url("Twitter", "gjreda").as_deref(),
            Some("https://twitter.com/gjreda")
        );
        assert_eq!(profile_url("myspace", "gjreda"), None);
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize_links("nav", &[]).unwrap().is_empty());
    }

    #[test]
    fn test_empty_pair_is_shape_error() {
        let err = normalize_links("nav", &entries("[[]]")).unwrap_err();
        assert_eq!(err.list, "nav");
        assert_eq!(err.index, 0);
        assert!(err.reason.contains("0 elements"));
    }

    #[test]
    fn test_bad_shapes_report_index() {
        for (src, needle) in [
            (r#"[["About", "/about"], ["only-label"]]"#, "1 element"),
            (r#"[["About", "/about"], ["About", 3]]"#, "two strings"),
            (r#"[["About", "/about"], "About"]"#, "found string"),
            (r#"[["About", "/about"], { name = "x" }]"#, "`label` or `platform`"),
            (r#"[["About", "/about"], { label = "x" }]"#, "missing `url`"),
            (r#"[["About", "/about"], { platform = "myspace", user = "g" }]"#, "no profile url"),
            (r#"[["About", "/about"], { platform = "github" }]"#, "`url` or `user`"),
            (r#"[["About", "/about"], { platform = "github", usr = "g" }]"#, "unknown key `usr`"),
            (r#"[["About", "/about"], ["", "/x"]]"#, "`label` is empty"),
        ] {
            let err = normalize_links("nav", &entries(src)).unwrap_err();
            assert_eq!(err.index, 1, "wrong index for {src}");
            assert!(
                err.reason.contains(needle),
                "reason `{}` should contain `{needle}`",
                err.reason
            );
        }
    }

    #[test]
    fn test_serialized_shape() {
        let links = normalize_links("nav", &entries(r#"[["About", "/about"]]"#)).unwrap();
        let json = serde_json::to_string(&links).unwrap();
        assert_eq!(json, r#"[{"type":"nav","label":"About","url":"/about"}]"#);
    }
}
