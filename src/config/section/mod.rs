//! Configuration section definitions.
//!
//! | Module     | Section       |
//! |------------|---------------|
//! | `site`     | `[site]`      |
//! | `defaults` | `[defaults]`  |
//! | `paths`    | `[paths]`     |
//! | `feed`     | `[feed]`      |
//! | `plugins`  | `[plugins]`   |
//! | `statics`  | `[static]`    |

mod defaults;
mod feed;
mod paths;
mod plugins;
mod site;
mod statics;

pub use defaults::{DefaultsConfig, Pagination};
pub use feed::FeedConfig;
pub use paths::PathsConfig;
pub use plugins::PluginsConfig;
pub use site::SiteInfoConfig;
pub use statics::StaticConfig;
