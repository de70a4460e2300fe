use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::scheme::DEFAULT_SCHEME;

/// Global configuration loaded from `~/.config/scarab-url/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScarabConfig {
    /// Link scheme name, without `://`.
    pub scheme: String,
    /// Application name shown in the OS scheme handler registration.
    pub app_name: String,
    /// Executable registered as the scheme handler. Defaults to the running binary.
    #[serde(default)]
    pub exec_path: Option<PathBuf>,
}

impl Default for ScarabConfig {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            app_name: "Lumafly".to_string(),
            exec_path: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("scarab-url")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ScarabConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<ScarabConfig> {
    if !path.exists() {
        let default_cfg = ScarabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: ScarabConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_values() {
        let cfg = ScarabConfig::default();
        assert_eq!(cfg.scheme, "scarab");
        assert_eq!(cfg.app_name, "Lumafly");
        assert!(cfg.exec_path.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ScarabConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ScarabConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            scheme = "lumafly"
            app_name = "Scarab+"
            exec_path = "/opt/scarab/scarab"
        "#;
        let cfg: ScarabConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.scheme, "lumafly");
        assert_eq!(cfg.app_name, "Scarab+");
        assert_eq!(cfg.exec_path.as_deref(), Some(Path::new("/opt/scarab/scarab")));
    }

    #[test]
    fn load_or_init_creates_then_reads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let created = load_or_init_at(&path).unwrap();
        assert_eq!(created, ScarabConfig::default());
        assert!(path.exists());

        fs::write(&path, "scheme = \"custom\"\napp_name = \"X\"\n").unwrap();
        let loaded = load_or_init_at(&path).unwrap();
        assert_eq!(loaded.scheme, "custom");
        assert!(loaded.exec_path.is_none());
    }

    #[test]
    fn load_rejects_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "scheme = ").unwrap();
        assert!(load_or_init_at(&path).is_err());
    }
}
