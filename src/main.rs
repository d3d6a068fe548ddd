//! Plume - settings resolver for a static blog.
//!
//! Loads `plume.toml` and answers the questions a site generator asks it:
//! where an item lives, which links to render, which features are on.

mod cli;
mod config;
mod logger;
mod page;
mod resolve;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;
use resolve::Resolver;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli.config)?;
    let resolver = Resolver::new(&config)?;

    match &cli.command {
        Commands::Check => cli::check::run_check(&resolver),
        Commands::Resolve { item, output } => cli::resolve::run_resolve(&resolver, item, output),
        Commands::Routes { manifest, output } => {
            cli::resolve::run_routes(&resolver, manifest, output)
        }
        Commands::Links { only, output } => cli::links::run_links(&resolver, *only, output),
        Commands::Features { name } => cli::features::run_features(&resolver, name.as_deref()),
    }
}
