//! `download` payload parsing: `Mod1/Mod2:'https://host/file.zip'/Mod3`.
//!
//! Each `/`-separated segment names one mod, optionally followed by a quoted
//! override URL. Malformed segments degrade to a bare mod name or a name with
//! no URL; parsing never fails.

mod segment;

use serde::Serialize;

use segment::split_segments;

/// One mod requested by a `download` link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadEntry {
    /// Never empty.
    pub mod_name: String,
    /// Set only for a quoted, absolute http(s) URL.
    pub override_url: Option<String>,
}

impl DownloadEntry {
    pub fn new(mod_name: impl Into<String>, override_url: Option<String>) -> Self {
        Self {
            mod_name: mod_name.into(),
            override_url,
        }
    }
}

/// Parses a `download` payload into entries in order of appearance.
/// Repeated mod names are kept.
pub fn parse_download_payload(data: &str) -> Vec<DownloadEntry> {
    split_segments(data)
        .into_iter()
        .filter_map(parse_segment)
        .collect()
}

/// Returns true if `s` is accepted as an override URL.
pub fn is_override_url(s: &str) -> bool {
    match url::Url::parse(s) {
        Ok(u) => matches!(u.scheme(), "http" | "https") && u.has_host(),
        Err(_) => false,
    }
}

fn parse_segment(segment: &str) -> Option<DownloadEntry> {
    let (name, override_url) = match segment.split_once(':') {
        None => (segment.trim(), None),
        Some((name, rest)) => match unquote(rest.trim_end()) {
            Some(candidate) => {
                let url = if is_override_url(candidate) {
                    Some(candidate.to_string())
                } else {
                    tracing::debug!(candidate, "ignoring invalid override url");
                    None
                };
                (name.trim(), url)
            }
            None => {
                tracing::debug!(segment, "override url is not quoted, keeping segment as a name");
                (segment.trim(), None)
            }
        },
    };

    if name.is_empty() {
        tracing::debug!(segment, "skipping segment without a mod name");
        return None;
    }
    Some(DownloadEntry::new(name, override_url))
}

fn unquote(s: &str) -> Option<&str> {
    s.strip_prefix('\'')?.strip_suffix('\'')
}
