//! Escaping for text embedded in markup fragments.
//!
//! Plain-text fields (intro text, work entries) are committed verbatim and
//! never pass through here; only text that ends up inside a fragment built
//! by string concatenation does.

/// Escape `s` for embedding in a markup fragment.
///
/// Substitutions run sequentially, `&` first, so entities introduced by the
/// later replacements are not themselves re-escaped. Feeding an already
/// escaped string through again expands its `&` characters a second time
/// (`&amp;` → `&amp;amp;`); callers escape exactly once.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}
