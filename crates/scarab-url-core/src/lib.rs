//! Parsing and dispatch state for `scarab://` mod manager links.
//!
//! A link such as `scarab://download/Mod1:'https://host/Mod1.zip'/Mod2` is
//! turned into a [`Command`] plus payload by [`parse_command`], and a
//! `download` payload into ordered [`DownloadEntry`] values by
//! [`parse_download_payload`]. Neither ever fails.

pub mod command;
pub mod config;
pub mod download;
pub mod handler;
pub mod link;
pub mod logging;
pub mod prompt;
pub mod register;
pub mod scheme;

pub use command::Command;
pub use download::{parse_download_payload, DownloadEntry};
pub use handler::CommandHandler;
pub use scheme::{parse_command, parse_command_with_scheme, ParsedUriCommand};
