//! Resolver error types.

use thiserror::Error;

use super::Placeholder;

/// A path template references metadata the content item does not carry.
///
/// Fatal for that single item only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{slug}` has no `{field}`, required by template `{template}`")]
pub struct MissingFieldError {
    /// The absent field.
    pub field: Placeholder,
    /// Template that asked for it.
    pub template: String,
    /// Slug of the offending item (may be empty when the slug itself is missing).
    pub slug: String,
}

/// A navigation/social link entry matches no recognized shape.
///
/// Fatal for configuration loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed entry `{list}[{index}]`: {reason}")]
pub struct ConfigShapeError {
    /// Name of the list in the config (`nav` or `social`).
    pub list: String,
    /// Zero-based position in the list.
    pub index: usize,
    pub reason: String,
}

/// Path template syntax errors, reported when the config is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unbalanced `{brace}` in template `{template}`")]
    Unbalanced { template: String, brace: char },

    #[error("unknown placeholder `{{{name}}}` in template `{template}`")]
    UnknownPlaceholder { template: String, name: String },

    #[error("placeholder `{{{name}}}` does not take a format in template `{template}`")]
    UnexpectedFormat { template: String, name: String },

    #[error("unsupported date directive `%{directive}` in template `{template}`")]
    DateDirective { template: String, directive: char },
}
