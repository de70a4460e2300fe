//! Tests for parse, handle and register.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_parse() {
    match parse(&["scarab-url", "parse", "scarab://download/MyMod1"]) {
        CliCommand::Parse { uri, json } => {
            assert_eq!(uri, "scarab://download/MyMod1");
            assert!(!json);
        }
        _ => panic!("expected Parse"),
    }
}

#[test]
fn cli_parse_parse_json() {
    match parse(&["scarab-url", "parse", "--json", "scarab://reset"]) {
        CliCommand::Parse { uri, json } => {
            assert_eq!(uri, "scarab://reset");
            assert!(json);
        }
        _ => panic!("expected Parse with --json"),
    }
}

#[test]
fn cli_parse_handle() {
    match parse(&["scarab-url", "handle", "scarab://forceUpdateAll"]) {
        CliCommand::Handle { uri, yes } => {
            assert_eq!(uri, "scarab://forceUpdateAll");
            assert!(!yes);
        }
        _ => panic!("expected Handle"),
    }
}

#[test]
fn cli_parse_handle_yes() {
    match parse(&["scarab-url", "handle", "-y", "scarab://reset"]) {
        CliCommand::Handle { yes, .. } => assert!(yes),
        _ => panic!("expected Handle with -y"),
    }
}

#[test]
fn cli_parse_register() {
    match parse(&["scarab-url", "register"]) {
        CliCommand::Register { exe, force } => {
            assert!(exe.is_none());
            assert!(!force);
        }
        _ => panic!("expected Register"),
    }
}

#[test]
fn cli_parse_register_exe() {
    match parse(&["scarab-url", "register", "--exe", "/opt/lumafly/lumafly"]) {
        CliCommand::Register { exe, force } => {
            assert_eq!(exe.as_deref(), Some(std::path::Path::new("/opt/lumafly/lumafly")));
            assert!(!force);
        }
        _ => panic!("expected Register with --exe"),
    }
}

#[test]
fn cli_parse_register_force() {
    match parse(&["scarab-url", "register", "--force"]) {
        CliCommand::Register { force, .. } => assert!(force),
        _ => panic!("expected Register with --force"),
    }
}

#[test]
fn cli_parse_requires_uri() {
    assert!(Cli::try_parse_from(["scarab-url", "parse"]).is_err());
    assert!(Cli::try_parse_from(["scarab-url", "handle"]).is_err());
}
