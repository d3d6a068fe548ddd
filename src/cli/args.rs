//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::CONFIG_FILE;
use crate::page::{ContentItem, ContentKind};
use crate::utils::date::DateTimeUtc;

/// Plume settings resolver CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(
        short = 'C',
        long,
        global = true,
        default_value = CONFIG_FILE,
        value_hint = clap::ValueHint::FilePath
    )]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Load and validate the config, then print a summary
    #[command(visible_alias = "c")]
    Check,

    /// Resolve URL and output path of a single content item
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        item: ItemArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Resolve every item of a JSON manifest
    Routes {
        /// JSON array of content items. Use `-` to read from stdin.
        #[arg(value_hint = clap::ValueHint::FilePath)]
        manifest: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print normalized navigation and social links
    #[command(visible_alias = "l")]
    Links {
        /// Only print one list
        #[arg(long, value_enum)]
        only: Option<LinkList>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show which optional features are enabled
    #[command(visible_alias = "f")]
    Features {
        /// Query a single feature; prints `true` or `false`
        name: Option<String>,
    },
}

/// Link list selector for `links --only`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LinkList {
    Nav,
    Social,
}

/// Content item metadata given on the command line.
#[derive(clap::Args, Debug, Clone)]
pub struct ItemArgs {
    /// Content kind
    #[arg(short, long, value_enum, default_value_t = ContentKind::Article)]
    pub kind: ContentKind,

    /// URL-safe slug
    #[arg(short, long)]
    pub slug: String,

    /// Date as YYYY-MM-DD or YYYY-MM-DDTHH:MM:SSZ
    #[arg(short, long, value_parser = parse_date)]
    pub date: Option<DateTimeUtc>,

    #[arg(short = 'g', long)]
    pub category: Option<String>,

    /// Language code
    #[arg(short, long)]
    pub lang: Option<String>,

    #[arg(short, long)]
    pub author: Option<String>,
}

impl ItemArgs {
    pub fn to_item(&self) -> ContentItem {
        let mut item = ContentItem {
            kind: self.kind,
            slug: self.slug.clone(),
            ..ContentItem::default()
        };
        if let Some(date) = self.date {
            item = item.with_date(date);
        }
        if let Some(category) = &self.category {
            item = item.with_category(category);
        }
        if let Some(lang) = &self.lang {
            item = item.with_lang(lang);
        }
        if let Some(author) = &self.author {
            item = item.with_author(author);
        }
        item
    }
}

/// Shared JSON output arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct OutputArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

fn parse_date(s: &str) -> Result<DateTimeUtc, String> {
    DateTimeUtc::try_from(s.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::try_parse_from([
            "plume", "resolve", "--slug", "my-post", "--date", "2014-03-02", "-g", "data",
        ])
        .unwrap();

        let Commands::Resolve { item, output } = cli.command else {
            panic!("expected resolve");
        };
        assert!(!output.pretty);
        let item = item.to_item();
        assert_eq!(item.kind, ContentKind::Article);
        assert_eq!(item.slug, "my-post");
        assert_eq!(item.date, Some(DateTimeUtc::from_ymd(2014, 3, 2)));
        assert_eq!(item.category.as_deref(), Some("data"));
    }

    #[test]
    fn test_parse_resolve_page() {
        let cli = Cli::try_parse_from(["plume", "r", "-k", "page", "-s", "about"]).unwrap();
        let Commands::Resolve { item, .. } = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(item.kind, ContentKind::Page);
        assert!(item.date.is_none());
    }

    #[test]
    fn test_parse_rejects_bad_date() {
        let result = Cli::try_parse_from(["plume", "resolve", "-s", "x", "-d", "March 2"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["plume", "features", "sitemap", "-C", "site.toml", "-v"])
            .unwrap();
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Features { name: Some(ref n) } if n == "sitemap"));
    }

    #[test]
    fn test_version_and_verbose_flags_are_distinct() {
        let err = Cli::try_parse_from(["plume", "-V"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);

        let cli = Cli::try_parse_from(["plume", "--verbose", "check"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Check));
    }
}
