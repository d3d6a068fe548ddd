//! Path templates: `{date:%Y}/{date:%m}/{slug}/index.html` and friends.
//!
//! # Syntax
//!
//! | Placeholder        | Value                                        |
//! |--------------------|----------------------------------------------|
//! | `{slug}`           | item slug                                    |
//! | `{category}`       | item category                                |
//! | `{lang}`           | item language                                |
//! | `{author}`         | item author                                  |
//! | `{date}`           | item date as `YYYY-MM-DD`                    |
//! | `{date:<fmt>}`     | item date through strftime-style directives  |
//! | `{{` / `}}`        | literal brace                                |
//!
//! Templates are parsed once, when the config is loaded. Resolving a parsed
//! template can only fail because the item lacks a referenced field.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{MissingFieldError, TemplateError};
use crate::page::ContentItem;
use crate::utils::date::check_format;
use crate::utils::url::normalize_relative;

/// Date rendering for a bare `{date}` placeholder.
const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// File name appended to directory-style save paths.
const INDEX_FILE: &str = "index.html";

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{|\}\}|\{([^{}:]*)(?::([^{}]*))?\}").expect("placeholder regex is valid")
});

/// Content metadata field a template can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placeholder {
    Slug,
    Date,
    Category,
    Lang,
    Author,
}

impl Placeholder {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Slug => "slug",
            Self::Date => "date",
            Self::Category => "category",
            Self::Lang => "lang",
            Self::Author => "author",
        }
    }

    /// Textual value of a string field, `None` when absent or empty.
    fn text<'a>(&self, item: &'a ContentItem) -> Option<&'a str> {
        let value = match self {
            Self::Slug => Some(item.slug.as_str()),
            Self::Category => item.category.as_deref(),
            Self::Lang => item.lang.as_deref(),
            Self::Author => item.author.as_deref(),
            Self::Date => None,
        };
        value.filter(|s| !s.is_empty())
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Placeholder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slug" => Ok(Self::Slug),
            "date" => Ok(Self::Date),
            "category" => Ok(Self::Category),
            "lang" => Ok(Self::Lang),
            "author" => Ok(Self::Author),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field {
        field: Placeholder,
        format: Option<String>,
    },
}

/// A parsed path template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PathTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl PathTemplate {
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut last = 0;

        for caps in PLACEHOLDER_RE.captures_iter(source) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            push_literal(source, &source[last..whole.start()], &mut literal)?;
            last = whole.end();

            match whole.as_str() {
                "{{" => literal.push('{'),
                "}}" => literal.push('}'),
                _ => {
                    let name = caps.get(1).map_or("", |m| m.as_str()).trim();
                    let field = name.parse::<Placeholder>().map_err(|()| {
                        TemplateError::UnknownPlaceholder {
                            template: source.to_owned(),
                            name: name.to_owned(),
                        }
                    })?;
                    let format = caps.get(2).map(|m| m.as_str().to_owned());

                    if let Some(fmt) = &format {
                        if field != Placeholder::Date {
                            return Err(TemplateError::UnexpectedFormat {
                                template: source.to_owned(),
                                name: name.to_owned(),
                            });
                        }
                        check_format(fmt).map_err(|directive| TemplateError::DateDirective {
                            template: source.to_owned(),
                            directive,
                        })?;
                    }

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field { field, format });
                }
            }
        }

        push_literal(source, &source[last..], &mut literal)?;
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_owned(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Fields referenced anywhere in the template.
    pub fn placeholders(&self) -> BTreeSet<Placeholder> {
        self.segments
            .iter()
            .filter_map(|seg| match seg {
                Segment::Field { field, .. } => Some(*field),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Substitute every placeholder, without any path normalization.
    pub fn render(&self, item: &ContentItem) -> Result<String, MissingFieldError> {
        let mut out = String::with_capacity(self.source.len() + 16);

        for seg in &self.segments {
            match seg {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field {
                    field: Placeholder::Date,
                    format,
                } => {
                    let date = item.date.ok_or_else(|| self.missing(Placeholder::Date, item))?;
                    out.push_str(&date.format(format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT)));
                }
                Segment::Field { field, .. } => {
                    let text = field.text(item).ok_or_else(|| self.missing(*field, item))?;
                    out.push_str(text);
                }
            }
        }

        Ok(out)
    }

    fn missing(&self, field: Placeholder, item: &ContentItem) -> MissingFieldError {
        MissingFieldError {
            field,
            template: self.source.clone(),
            slug: item.slug.clone(),
        }
    }
}

/// Append literal text, rejecting braces that did not form a placeholder.
fn push_literal(template: &str, text: &str, literal: &mut String) -> Result<(), TemplateError> {
    if let Some(brace) = text.chars().find(|c| matches!(c, '{' | '}')) {
        return Err(TemplateError::Unbalanced {
            template: template.to_owned(),
            brace,
        });
    }
    literal.push_str(text);
    Ok(())
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for PathTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PathTemplate {
    type Error = TemplateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PathTemplate> for String {
    fn from(value: PathTemplate) -> Self {
        value.source
    }
}

/// Resolve an on-disk output path for `item`.
///
/// The result is relative, has no repeated slashes, and directory-style
/// paths (trailing `/`, or nothing at all) end in `index.html`.
pub fn resolve_path(
    template: &PathTemplate,
    item: &ContentItem,
) -> Result<String, MissingFieldError> {
    let mut path = normalize_relative(&template.render(item)?);
    if path.is_empty() || path.ends_with('/') {
        path.push_str(INDEX_FILE);
    }
    Ok(path)
}

/// Resolve a canonical URL for `item`, relative to the site root.
///
/// Same normalization as [`resolve_path`], but directory URLs keep their
/// trailing slash.
pub fn resolve_url(
    template: &PathTemplate,
    item: &ContentItem,
) -> Result<String, MissingFieldError> {
    Ok(normalize_relative(&template.render(item)?))
}
