//! `scarab-url handle <uri>` – the process the browser launches for a link.
//!
//! The handler publishes the parsed link; a subscriber task plays the part of
//! the application screens that act on it.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use scarab_url_core::config::ScarabConfig;
use scarab_url_core::prompt::prompt;
use scarab_url_core::{Command, CommandHandler};

pub async fn run_handle<W: Write>(
    cfg: &ScarabConfig,
    uri: &str,
    yes: bool,
    out: &mut W,
) -> Result<()> {
    let handler = CommandHandler::with_scheme(cfg.scheme.clone(), false);
    let mut rx = handler.subscribe();

    let observer = tokio::spawn(async move {
        if rx.changed().await.is_err() {
            return None;
        }
        let snapshot = rx.borrow_and_update().clone();
        Some(snapshot)
    });

    handler.accept(uri);
    let received = observer
        .await
        .context("link observer task failed")?
        .context("handler closed before publishing a command")?;

    if received.command == Command::None {
        writeln!(out, "Nothing to do: {uri} is not a {}:// command.", cfg.scheme)?;
        handler.finish();
        return Ok(());
    }

    if let Some(question) = prompt(&received) {
        writeln!(out, "{question}")?;
        if !yes {
            write!(out, "Continue? [y/N] ")?;
            out.flush()?;
            if !confirm().await? {
                handler.decline(&received);
            }
        }
    }
    handler.finish();

    let current = handler.current();
    if current.command == Command::None {
        writeln!(out, "Declined.")?;
        return Ok(());
    }

    writeln!(out, "Accepted: {}", current.command)?;
    if !current.data.is_empty() {
        writeln!(out, "  data: {}", current.decoded_data())?;
    }
    for entry in handler.download_entries() {
        match entry.override_url {
            Some(url) => writeln!(out, "  {} <- {}", entry.mod_name, url)?,
            None => writeln!(out, "  {}", entry.mod_name)?,
        }
    }
    Ok(())
}

async fn confirm() -> Result<bool> {
    tokio::task::spawn_blocking(|| -> Result<bool> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(matches!(line.trim(), "y" | "Y" | "yes"))
    })
    .await?
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn handle(uri: &str) -> String {
        let mut out = Vec::new();
        run_handle(&ScarabConfig::default(), uri, true, &mut out)
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn handle_download_accepted() {
        let out = handle("scarab://download/My%20Mod/Other:'https://x.io/o.zip'").await;
        assert!(out.starts_with("Download the following mods:"));
        assert!(out.contains("Accepted: download\n"));
        assert!(out.contains("  data: My Mod/Other:'https://x.io/o.zip'\n"));
        assert!(out.contains("\n  My Mod\n"));
        assert!(out.contains("\n  Other <- https://x.io/o.zip\n"));
    }

    #[tokio::test]
    async fn handle_command_without_prompt() {
        let out = handle("scarab://modpack/abc123").await;
        assert_eq!(out, "Accepted: modpack\n  data: abc123\n");
    }

    #[tokio::test]
    async fn handle_invalid_link() {
        let out = handle("scarab://bogus").await;
        assert_eq!(
            out,
            "Nothing to do: scarab://bogus is not a scarab:// command.\n"
        );
    }
}
