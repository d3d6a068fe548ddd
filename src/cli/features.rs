//! `features` command.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::resolve::{Resolver, is_truthy};

/// Print one feature's state, or a table of all declared features.
///
/// Undeclared features are reported as disabled.
pub fn run_features(resolver: &Resolver, name: Option<&str>) -> Result<()> {
    for line in report(resolver, name) {
        println!("{line}");
    }
    Ok(())
}

fn report(resolver: &Resolver, name: Option<&str>) -> Vec<String> {
    if let Some(name) = name {
        return vec![resolver.is_enabled(name).to_string()];
    }

    let features = &resolver.config().features;
    let width = features.keys().map(String::len).max().unwrap_or(0);
    features
        .iter()
        .map(|(name, value)| {
            let state = if is_truthy(value) {
                "enabled".green().to_string()
            } else {
                "disabled".dimmed().to_string()
            };
            format!("{name:<width$}  {state}")
        })
        .collect()
}
