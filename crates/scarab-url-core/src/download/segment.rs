//! Quote-aware splitting of a download payload into per-mod segments.

/// Splits `data` on `/`, except inside a `:'...'` override URL section.
///
/// An unterminated quote runs to the end of the payload. Blank segments
/// (from repeated or trailing separators) are dropped.
pub(super) fn split_segments(data: &str) -> Vec<&str> {
    let bytes = data.as_bytes();
    let mut segments = Vec::new();
    let mut start = 0;
    let mut in_quote = false;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\'' if in_quote => in_quote = false,
            b':' if !in_quote && bytes.get(i + 1) == Some(&b'\'') => {
                in_quote = true;
                // Skip the opening quote so it is not taken as a closing one.
                i += 1;
            }
            b'/' if !in_quote => {
                segments.push(&data[start..i]);
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    segments.push(&data[start..]);

    segments.retain(|s| !s.trim().is_empty());
    segments
}
