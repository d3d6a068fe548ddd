//! `links` command.

use anyhow::Result;
use serde::Serialize;

use super::args::{LinkList, OutputArgs};
use super::common::write_json;
use crate::resolve::{LinkEntry, Resolver};

#[derive(Debug, Serialize)]
struct LinkLists<'a> {
    nav: &'a [LinkEntry],
    social: &'a [LinkEntry],
}

/// Print the normalized link lists as JSON.
pub fn run_links(resolver: &Resolver, only: Option<LinkList>, output: &OutputArgs) -> Result<()> {
    match only {
        Some(LinkList::Nav) => write_json(resolver.nav(), output, "links"),
        Some(LinkList::Social) => write_json(resolver.social(), output, "links"),
        None => write_json(
            &LinkLists {
                nav: resolver.nav(),
                social: resolver.social(),
            },
            output,
            "links",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_link_lists_serialization() {
        let config = test_parse_config(
            r#"
nav = [["About", "/about/"]]
social = [{ platform = "twitter", user = "gjreda" }]
"#,
        );
        let resolver = Resolver::new(&config).unwrap();
        let lists = LinkLists {
            nav: resolver.nav(),
            social: resolver.social(),
        };

        let json = serde_json::to_value(&lists).unwrap();
        assert_eq!(json["nav"][0]["type"], "nav");
        assert_eq!(json["nav"][0]["label"], "About");
        assert_eq!(json["social"][0]["type"], "social");
        assert_eq!(json["social"][0]["url"], "https://twitter.com/gjreda");
    }
}
