//! Registering the link scheme with the operating system, so browsers hand
//! `scheme://...` links to `<exe> <link>`.
//!
//! - Windows: `HKEY_CURRENT_USER\Software\Classes\<scheme>` (no admin required)
//! - macOS: `.app` bundle in `~/Applications`
//! - Linux: `.desktop` file in `~/.local/share/applications/`

use anyhow::{Context, Result};
use std::path::Path;
use sysuri::{is_registered, register, UriScheme};

/// Human-readable name of the scheme handler, e.g. `Lumafly (scarab protocol)`.
pub fn scheme_description(app_name: &str, scheme: &str) -> String {
    format!("{app_name} ({scheme} protocol)")
}

/// Registers `exe` as the handler for `scheme`.
///
/// Skips registration when the scheme is already known to the OS, unless
/// `force` is set (e.g. the executable moved). Returns whether a
/// registration was written.
pub fn ensure_registered(app_name: &str, exe: &Path, scheme: &str, force: bool) -> Result<bool> {
    if !force {
        match is_registered(scheme) {
            Ok(true) => {
                tracing::debug!("{}:// scheme already registered", scheme);
                return Ok(false);
            }
            Ok(false) => tracing::debug!("{}:// scheme not registered, registering now", scheme),
            Err(e) => tracing::warn!(
                "failed to check {}:// registration status: {}, attempting registration",
                scheme,
                e
            ),
        }
    }

    let description = scheme_description(app_name, scheme);
    let uri_scheme = UriScheme::new(scheme, description.as_str(), exe.to_path_buf());
    register(&uri_scheme)
        .with_context(|| format!("failed to register {scheme}:// handler"))?;

    tracing::info!("registered {}:// handler for {}", scheme, exe.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_names_app_and_scheme() {
        assert_eq!(
            scheme_description("Lumafly", "scarab"),
            "Lumafly (scarab protocol)"
        );
    }
}
