//! Content items and their resolved routes.

mod item;
mod route;

pub use item::{ContentItem, ContentKind};
pub use route::ContentRoute;
