//! Configuration utility types.
//!
//! | Module        | Purpose                                   |
//! |---------------|-------------------------------------------|
//! | `error`       | Configuration error types                 |
//! | `diagnostics` | Field paths and collected validation notes |

mod diagnostics;
mod error;

pub use diagnostics::{ConfigDiagnostics, FieldPath};
pub use error::ConfigError;
