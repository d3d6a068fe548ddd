//! Content route - item metadata to output location mapping.

use serde::Serialize;

use super::ContentKind;

/// Where a content item lives in the generated site.
///
/// # Example
///
/// ```text
/// Item:  article, slug = my-post, date = 2014-03-02
///
/// ContentRoute {
///     url:      2014/03/02/my-post/
///     save_as:  2014/03/02/my-post/index.html
///     full_url: http://www.gregreda.com/2014/03/02/my-post/
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentRoute {
    pub kind: ContentKind,
    pub slug: String,
    /// Canonical URL relative to the site root.
    pub url: String,
    /// Output file relative to the output directory.
    pub save_as: String,
    /// Absolute URL, present when `site.url` is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_url: Option<String>,
    /// Item date rendered with `defaults.date_format`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_date: Option<String>,
}
