//! `scarab-url register` – register this program as the OS scheme handler.

use anyhow::{Context, Result};
use scarab_url_core::config::ScarabConfig;
use scarab_url_core::register::ensure_registered;
use std::path::PathBuf;

pub fn run_register(cfg: &ScarabConfig, exe: Option<PathBuf>, force: bool) -> Result<()> {
    let exe = match exe.or_else(|| cfg.exec_path.clone()) {
        Some(path) => path,
        None => std::env::current_exe().context("cannot determine the current executable")?,
    };
    if ensure_registered(&cfg.app_name, &exe, &cfg.scheme, force)? {
        println!("Registered {}:// for {}", cfg.scheme, exe.display());
    } else {
        println!(
            "{}:// is already registered (use --force to re-register)",
            cfg.scheme
        );
    }
    Ok(())
}
