//! Confirmation text shown before acting on a link.

use crate::command::Command;
use crate::download::{parse_download_payload, DownloadEntry};
use crate::scheme::ParsedUriCommand;

/// Suffix for mods whose download URL came from the link rather than the
/// official mod list.
pub const NOT_IN_MODLINKS: &str = "not in official mod list";

/// Returns the question to ask the user, or `None` when the command runs
/// without confirmation.
pub fn prompt(cmd: &ParsedUriCommand) -> Option<String> {
    let text = match cmd.command {
        Command::Download => format!(
            "Download the following mods: {}",
            mod_list(&parse_download_payload(&cmd.decoded_data()))
        ),
        Command::Reset => "Reset the mod manager's persistent settings".to_string(),
        Command::ForceUpdateAll => "Reinstall all mods which could help fix issues \
            that happened because mods are not downloaded correctly."
            .to_string(),
        Command::CustomModLinks => {
            format!("Load a custom mod list from: {}", cmd.decoded_data())
        }
        Command::RemoveAllModsGlobalSettings => "Reset all mods' global settings".to_string(),
        Command::RemoveGlobalSettings => format!(
            "Remove global settings for the following mods: {}",
            mod_list(&parse_download_payload(&cmd.decoded_data()))
        ),
        Command::None | Command::UseOfficialModLinks | Command::Launch | Command::Modpack => {
            return None
        }
    };
    Some(text)
}

fn mod_list(entries: &[DownloadEntry]) -> String {
    if entries.is_empty() {
        return "None".to_string();
    }
    let mut list = String::from("\n\n");
    for entry in entries {
        list.push_str(&entry.mod_name);
        if entry.override_url.is_some() {
            list.push_str(&format!(" ({NOT_IN_MODLINKS})"));
        }
        list.push_str(",\n");
    }
    list
}
