//! Building `scarab://` links, the inverse of [`crate::scheme`] and
//! [`crate::download`].

use thiserror::Error;

use crate::command::Command;
use crate::download::{is_override_url, DownloadEntry};

/// Characters a mod name cannot carry through a download link.
const FORBIDDEN_NAME_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '\'', '<', '>', '|'];

/// Characters left unescaped in override URLs, as `encodeURI` does, minus the
/// `'` that delimits them.
const URI_SAFE: &str = "-_.!~*();/?:@&=+$,#";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("mod name is empty")]
    EmptyModName,
    #[error("mod name {0:?} contains a character not allowed in links")]
    InvalidModName(String),
    #[error("override url {0:?} is not an absolute http(s) url")]
    InvalidOverrideUrl(String),
    #[error("command `{0}` cannot be linked")]
    NotLinkable(Command),
    #[error("command `{0}` takes no data")]
    UnexpectedData(Command),
}

/// Builds `scheme://download/Name1/Name2:'url'` from entries.
///
/// Names and URLs are percent-encoded, so the link parses back to the same
/// entries once its payload is decoded.
pub fn download_link(scheme: &str, entries: &[DownloadEntry]) -> Result<String, LinkError> {
    let mut segments = Vec::with_capacity(entries.len());
    for entry in entries {
        let name = entry.mod_name.trim();
        if name.is_empty() {
            return Err(LinkError::EmptyModName);
        }
        if name.chars().any(|c| c.is_control() || FORBIDDEN_NAME_CHARS.contains(&c)) {
            return Err(LinkError::InvalidModName(entry.mod_name.clone()));
        }
        match &entry.override_url {
            Some(url) if url.contains('\'') || !is_override_url(url) => {
                return Err(LinkError::InvalidOverrideUrl(url.clone()));
            }
            Some(url) => segments.push(format!(
                "{}:'{}'",
                urlencoding::encode(name),
                encode_uri(url)
            )),
            None => segments.push(urlencoding::encode(name).into_owned()),
        }
    }
    Ok(format!(
        "{scheme}://{}/{}",
        Command::Download.as_keyword(),
        segments.join("/")
    ))
}

/// Builds a link for any command. `data` must be empty for commands that
/// take no payload.
pub fn command_link(scheme: &str, command: Command, data: &str) -> Result<String, LinkError> {
    if command == Command::None {
        return Err(LinkError::NotLinkable(command));
    }
    let data = data.trim();
    if data.is_empty() {
        return Ok(format!("{scheme}://{}", command.as_keyword()));
    }
    if !command.takes_payload() {
        return Err(LinkError::UnexpectedData(command));
    }
    Ok(format!("{scheme}://{}/{data}", command.as_keyword()))
}

fn encode_uri(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut buf = [0u8; 4];
    for c in s.chars() {
        if c.is_ascii_alphanumeric() || URI_SAFE.contains(c) {
            out.push(c);
        } else {
            out.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }
    out
}
