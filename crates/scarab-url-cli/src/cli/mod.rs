//! CLI for scarab:// links.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use scarab_url_core::config;
use std::path::PathBuf;

use commands::{run_handle, run_link, run_parse, run_register};

/// Top-level CLI for scarab:// links.
#[derive(Debug, Parser)]
#[command(name = "scarab-url")]
#[command(about = "Parse, handle and build scarab:// mod manager links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Parse a link and print the command it carries.
    Parse {
        /// Link such as scarab://download/MyMod.
        uri: String,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Handle a link as the registered scheme handler: confirm, then report the command.
    Handle {
        /// Link passed by the browser.
        uri: String,

        /// Accept the confirmation prompt without asking.
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Build a link.
    Link {
        #[command(subcommand)]
        target: LinkTarget,
    },

    /// Register this program as the OS scheme handler.
    Register {
        /// Executable to register instead of the configured or current one.
        #[arg(long, value_name = "PATH")]
        exe: Option<PathBuf>,

        /// Register even if the scheme is already registered.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum LinkTarget {
    /// Download link. Each MOD is `Name` or `Name=https://override/url.zip`.
    Download {
        #[arg(required = true, value_name = "MOD")]
        mods: Vec<String>,
    },

    /// Link for any other command, e.g. `reset` or `customModLinks <url>`.
    Command {
        /// Command keyword.
        name: String,
        /// Payload for commands that take one.
        data: Option<String>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Parse { uri, json } => run_parse(&cfg, &uri, json)?,
            CliCommand::Handle { uri, yes } => {
                run_handle(&cfg, &uri, yes, &mut std::io::stdout()).await?
            }
            CliCommand::Link { target } => run_link(&cfg, target)?,
            CliCommand::Register { exe, force } => run_register(&cfg, exe, force)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
