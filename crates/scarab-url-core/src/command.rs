//! The closed set of actions a `scarab://` link can request.

use serde::{Deserialize, Serialize};

/// Scheme keyword selected by the first path segment after `scarab://`.
///
/// `None` is both the initial state of a handler and the fallback for any
/// keyword that is not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    #[default]
    None,
    Download,
    Reset,
    ForceUpdateAll,
    CustomModLinks,
    UseOfficialModLinks,
    RemoveAllModsGlobalSettings,
    RemoveGlobalSettings,
    Launch,
    Modpack,
}

impl Command {
    /// Every command, in declaration order.
    pub const ALL: [Command; 10] = [
        Command::None,
        Command::Download,
        Command::Reset,
        Command::ForceUpdateAll,
        Command::CustomModLinks,
        Command::UseOfficialModLinks,
        Command::RemoveAllModsGlobalSettings,
        Command::RemoveGlobalSettings,
        Command::Launch,
        Command::Modpack,
    ];

    /// Keyword as it appears in a link.
    pub fn as_keyword(self) -> &'static str {
        match self {
            Command::None => "none",
            Command::Download => "download",
            Command::Reset => "reset",
            Command::ForceUpdateAll => "forceUpdateAll",
            Command::CustomModLinks => "customModLinks",
            Command::UseOfficialModLinks => "useOfficialModLinks",
            Command::RemoveAllModsGlobalSettings => "removeAllModsGlobalSettings",
            Command::RemoveGlobalSettings => "removeGlobalSettings",
            Command::Launch => "launch",
            Command::Modpack => "modpack",
        }
    }

    /// Case-sensitive keyword lookup. `"none"` itself is not an actionable
    /// keyword and, like anything unknown, maps to `None`.
    pub fn from_keyword(s: &str) -> Self {
        match s {
            "download" => Command::Download,
            "reset" => Command::Reset,
            "forceUpdateAll" => Command::ForceUpdateAll,
            "customModLinks" => Command::CustomModLinks,
            "useOfficialModLinks" => Command::UseOfficialModLinks,
            "removeAllModsGlobalSettings" => Command::RemoveAllModsGlobalSettings,
            "removeGlobalSettings" => Command::RemoveGlobalSettings,
            "launch" => Command::Launch,
            "modpack" => Command::Modpack,
            _ => Command::None,
        }
    }

    /// Whether the text after the keyword is kept as the command's data.
    pub fn takes_payload(self) -> bool {
        matches!(
            self,
            Command::Download
                | Command::CustomModLinks
                | Command::RemoveGlobalSettings
                | Command::Modpack
        )
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_keyword())
    }
}
