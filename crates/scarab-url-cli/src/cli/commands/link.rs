//! `scarab-url link ...` – build links for the website or for sharing.

use anyhow::{bail, Result};
use scarab_url_core::config::ScarabConfig;
use scarab_url_core::link::{command_link, download_link};
use scarab_url_core::{Command, DownloadEntry};

use crate::cli::LinkTarget;

pub fn run_link(cfg: &ScarabConfig, target: LinkTarget) -> Result<()> {
    let link = match target {
        LinkTarget::Download { mods } => {
            let entries: Vec<DownloadEntry> = mods.iter().map(String::as_str).map(parse_mod_arg).collect();
            download_link(&cfg.scheme, &entries)?
        }
        LinkTarget::Command { name, data } => {
            let command = Command::from_keyword(&name);
            if command == Command::None {
                bail!("unknown command keyword: {name}");
            }
            command_link(&cfg.scheme, command, data.as_deref().unwrap_or(""))?
        }
    };
    println!("{link}");
    Ok(())
}

/// `Name` or `Name=url`. The URL is validated when the link is built.
fn parse_mod_arg(arg: &str) -> DownloadEntry {
    match arg.split_once('=') {
        Some((name, url)) => DownloadEntry::new(name.trim(), Some(url.trim().to_string())),
        None => DownloadEntry::new(arg.trim(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mod_arg_without_url() {
        assert_eq!(parse_mod_arg("MyMod"), DownloadEntry::new("MyMod", None));
    }

    #[test]
    fn mod_arg_with_url() {
        assert_eq!(
            parse_mod_arg("MyMod=https://x.io/a.zip?dl=1"),
            DownloadEntry::new("MyMod", Some("https://x.io/a.zip?dl=1".to_string()))
        );
    }
}
