//! Utility modules for the settings resolver.

pub mod date;
pub mod url;
