//! Tests for the link subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand, LinkTarget};
use clap::Parser;

#[test]
fn cli_parse_link_download() {
    match parse(&[
        "scarab-url",
        "link",
        "download",
        "MyMod1",
        "MyMod2=https://mod2download.zip",
    ]) {
        CliCommand::Link {
            target: LinkTarget::Download { mods },
        } => assert_eq!(mods, vec!["MyMod1", "MyMod2=https://mod2download.zip"]),
        _ => panic!("expected Link Download"),
    }
}

#[test]
fn cli_parse_link_download_requires_mods() {
    assert!(Cli::try_parse_from(["scarab-url", "link", "download"]).is_err());
}

#[test]
fn cli_parse_link_command() {
    match parse(&["scarab-url", "link", "command", "reset"]) {
        CliCommand::Link {
            target: LinkTarget::Command { name, data },
        } => {
            assert_eq!(name, "reset");
            assert!(data.is_none());
        }
        _ => panic!("expected Link Command"),
    }
}

#[test]
fn cli_parse_link_command_with_data() {
    match parse(&[
        "scarab-url",
        "link",
        "command",
        "customModLinks",
        "https://x.io/ModLinks.xml",
    ]) {
        CliCommand::Link {
            target: LinkTarget::Command { name, data },
        } => {
            assert_eq!(name, "customModLinks");
            assert_eq!(data.as_deref(), Some("https://x.io/ModLinks.xml"));
        }
        _ => panic!("expected Link Command with data"),
    }
}
