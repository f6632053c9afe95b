//! URL fragment normalization.
//!
//! Fragments arrive from the routing layer as raw strings, with or without
//! the leading `#` and possibly percent-encoded. Section ids are compared
//! against the decoded form.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// Characters escaped in a fragment (WHATWG fragment set plus `%`).
const FRAGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'%');

/// Decode a raw fragment into a section id candidate.
///
/// Strips one leading `#` and decodes percent-escapes (invalid UTF-8 is
/// replaced lossily). Returns `None` when nothing is left.
///
/// # Examples
///
/// ```
/// use mfl_nav::fragment::normalize;
///
/// assert_eq!(normalize("#api").as_deref(), Some("api"));
/// assert_eq!(normalize("caf%C3%A9").as_deref(), Some("café"));
/// assert_eq!(normalize("#"), None);
/// ```
pub fn normalize(raw: &str) -> Option<Cow<'_, str>> {
    let stripped = raw.strip_prefix('#').unwrap_or(raw);
    if stripped.is_empty() {
        return None;
    }
    Some(percent_decode_str(stripped).decode_utf8_lossy())
}

/// Percent-encode a section id for use as a fragment.
pub fn encode(id: &str) -> String {
    utf8_percent_encode(id, FRAGMENT_ENCODE_SET).to_string()
}

/// In-page link to a section id (`#` followed by the encoded id).
pub fn href(id: &str) -> String {
    format!("#{}", encode(id))
}
