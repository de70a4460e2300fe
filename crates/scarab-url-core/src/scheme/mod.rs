//! `scheme://keyword[/payload]` parsing.
//!
//! The parser is total: any input, however malformed, yields a
//! [`ParsedUriCommand`]. Unknown or missing keywords become [`Command::None`]
//! with empty data.

use serde::Serialize;

use crate::command::Command;

/// Scheme registered by the mod manager.
pub const DEFAULT_SCHEME: &str = "scarab";

/// Result of parsing one link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedUriCommand {
    pub command: Command,
    /// Payload after the keyword, verbatim apart from whitespace trimming.
    /// Always empty for commands that take no payload.
    pub data: String,
}

impl ParsedUriCommand {
    pub fn none() -> Self {
        Self::default()
    }

    /// `data` with `%XX` escapes decoded, as browsers deliver e.g. spaces in
    /// mod names as `%20`. Malformed escapes are kept verbatim, invalid UTF-8
    /// is replaced lossily and `+` is left alone.
    pub fn decoded_data(&self) -> String {
        String::from_utf8_lossy(&urlencoding::decode_binary(self.data.as_bytes())).into_owned()
    }
}

/// Parses a `scarab://` link.
pub fn parse_command(uri: &str) -> ParsedUriCommand {
    parse_command_with_scheme(DEFAULT_SCHEME, uri)
}

/// Parses `uri` against an arbitrary scheme name (without `://`).
pub fn parse_command_with_scheme(scheme: &str, uri: &str) -> ParsedUriCommand {
    let uri = uri.trim();
    let rest = match uri
        .strip_prefix(scheme)
        .and_then(|s| s.strip_prefix("://"))
    {
        Some(rest) if !rest.is_empty() => rest,
        _ => {
            tracing::debug!(uri, "link does not carry a {}:// command", scheme);
            return ParsedUriCommand::none();
        }
    };

    let (keyword, remainder) = rest.split_once('/').unwrap_or((rest, ""));
    let command = Command::from_keyword(keyword);
    if command == Command::None {
        tracing::debug!(keyword, "unrecognized scheme keyword");
        return ParsedUriCommand::none();
    }

    let data = if command.takes_payload() {
        remainder.trim().to_string()
    } else {
        String::new()
    };

    ParsedUriCommand { command, data }
}
