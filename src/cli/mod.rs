//! Command-line interface module.

mod args;
pub mod check;
pub mod common;
pub mod features;
pub mod links;
pub mod resolve;

pub use args::{Cli, Commands};
