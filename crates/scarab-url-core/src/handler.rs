//! Latest received link, shared with the parts of the application that act on it.
//!
//! The handler is owned by the composition root. Each accepted link is
//! published as one immutable [`ParsedUriCommand`] snapshot, so observers on
//! any thread never see a command paired with another link's data.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use crate::command::Command;
use crate::download::{parse_download_payload, DownloadEntry};
use crate::scheme::{parse_command_with_scheme, ParsedUriCommand, DEFAULT_SCHEME};

pub type Snapshot = Arc<ParsedUriCommand>;

pub struct CommandHandler {
    scheme: String,
    handled: AtomicBool,
    tx: watch::Sender<Snapshot>,
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHandler {
    pub fn new() -> Self {
        Self::with_scheme(DEFAULT_SCHEME, false)
    }

    /// `handled = true` makes the handler ignore every link, e.g. for an
    /// instance that is not the first one launched.
    pub fn with_scheme(scheme: impl Into<String>, handled: bool) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(ParsedUriCommand::none()));
        Self {
            scheme: scheme.into(),
            handled: AtomicBool::new(handled),
            tx,
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Parses `uri` and, unless the handler is already handled, publishes the
    /// result as the current command.
    pub fn accept(&self, uri: &str) -> ParsedUriCommand {
        let parsed = parse_command_with_scheme(&self.scheme, uri);
        if self.is_handled() {
            tracing::debug!(uri, "link ignored, handler already handled");
            return parsed;
        }
        if parsed.command == Command::None && !uri.trim().is_empty() {
            tracing::warn!(uri, "not an accepted {}:// command", self.scheme);
        } else {
            tracing::info!(command = %parsed.command, data = %parsed.data, "received link command");
        }
        self.publish(parsed.clone());
        parsed
    }

    /// The user declined the command in `shown`. Resets to `none` only if
    /// `shown` is still the current snapshot; returns whether it was reset.
    pub fn decline(&self, shown: &Snapshot) -> bool {
        let reset = self.tx.send_if_modified(|current| {
            if !Arc::ptr_eq(current, shown) {
                return false;
            }
            *current = Arc::new(ParsedUriCommand::none());
            true
        });
        if reset {
            tracing::info!(command = %shown.command, "link command declined");
        } else {
            tracing::debug!(command = %shown.command, "declined command already replaced");
        }
        reset
    }

    /// Marks the current command as dealt with; later links are ignored.
    pub fn finish(&self) {
        self.handled.store(true, Ordering::SeqCst);
    }

    pub fn is_handled(&self) -> bool {
        self.handled.load(Ordering::SeqCst)
    }

    pub fn current(&self) -> Snapshot {
        Arc::clone(&self.tx.borrow())
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.tx.subscribe()
    }

    /// Mods named by the current command, for `download` and
    /// `removeGlobalSettings`. Empty for every other command.
    pub fn download_entries(&self) -> Vec<DownloadEntry> {
        let current = self.current();
        match current.command {
            Command::Download | Command::RemoveGlobalSettings => {
                parse_download_payload(&current.decoded_data())
            }
            _ => Vec::new(),
        }
    }

    fn publish(&self, parsed: ParsedUriCommand) {
        // send_replace stores the value even when nobody is subscribed.
        self.tx.send_replace(Arc::new(parsed));
    }
}
