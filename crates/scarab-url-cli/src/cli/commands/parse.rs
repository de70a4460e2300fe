//! `scarab-url parse <uri>` – show what a link asks for.

use anyhow::Result;
use scarab_url_core::config::ScarabConfig;
use scarab_url_core::{parse_command_with_scheme, parse_download_payload, Command, DownloadEntry};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ParseReport {
    command: Command,
    data: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    entries: Vec<DownloadEntry>,
}

pub fn run_parse(cfg: &ScarabConfig, uri: &str, json: bool) -> Result<()> {
    let parsed = parse_command_with_scheme(&cfg.scheme, uri);
    let entries = match parsed.command {
        Command::Download | Command::RemoveGlobalSettings => {
            parse_download_payload(&parsed.decoded_data())
        }
        _ => Vec::new(),
    };
    let report = ParseReport {
        command: parsed.command,
        data: parsed.data,
        entries,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("command: {}", report.command);
    if !report.data.is_empty() {
        println!("data:    {}", report.data);
    }
    for entry in &report.entries {
        match &entry.override_url {
            Some(url) => println!("  {:<32} {}", entry.mod_name, url),
            None => println!("  {}", entry.mod_name),
        }
    }
    Ok(())
}
