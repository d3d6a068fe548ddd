//! URL path utilities.
//!
//! Provides consistent handling of resolved paths and link targets:
//! - Relative path normalization (leading and repeated slashes)
//! - Link type detection (external vs internal)
//! - URL-safety check for slug-like segments

/// Collapse runs of `/` into a single slash and drop leading slashes.
///
/// Trailing slashes are kept, they mark directory-style URLs.
///
/// # Examples
/// ```ignore
/// assert_eq!(normalize_relative("//2014//03/my-post/"), "2014/03/my-post/");
/// ```
pub fn normalize_relative(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_slash = true;
    for c in path.chars() {
        if c == '/' {
            if !prev_slash {
                out.push(c);
            }
            prev_slash = true;
        } else {
            out.push(c);
            prev_slash = false;
        }
    }
    out
}

/// Check if a link is external (has a URL scheme like http:, mailto:, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Check that a path segment can appear in a URL without escaping.
///
/// Allows the RFC 3986 unreserved set plus `/` for nested slugs.
#[inline]
pub fn is_url_safe(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~' | '/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_relative() {
        assert_eq!(normalize_relative("2014/03/02/post/"), "2014/03/02/post/");
        assert_eq!(normalize_relative("/about/"), "about/");
        assert_eq!(normalize_relative("a//b///c"), "a/b/c");
        assert_eq!(normalize_relative("///"), "");
        assert_eq!(normalize_relative(""), "");
    }

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://example.com"));
        assert!(is_external_link("mailto:user@example.com"));
        assert!(!is_external_link("/about"));
        assert!(!is_external_link("./file.txt"));
        assert!(!is_external_link("#section"));
    }

    #[test]
    fn test_is_url_safe() {
        assert!(is_url_safe("my-post"));
        assert!(is_url_safe("2014_recap.v2"));
        assert!(is_url_safe("nested/slug"));
        assert!(!is_url_safe("my post"));
        assert!(!is_url_safe("café"));
        assert!(!is_url_safe("a?b"));
        assert!(!is_url_safe(""));
    }
}
