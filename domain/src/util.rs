//! Shared utility functions.

/// Default preview length used by log statements.
pub const LOG_PREVIEW_CHARS: usize = 120;

/// Single-line preview of `s` for log output.
///
/// Newlines are flattened to spaces and the text is cut after `max_chars`
/// characters (never inside a UTF-8 sequence), with `...` appended when
/// anything was dropped.
pub fn preview(s: &str, max_chars: usize) -> String {
    let mut out = String::with_capacity(s.len().min(max_chars + 3));
    let mut chars = s.chars();
    for c in chars.by_ref().take(max_chars) {
        out.push(if c == '\n' || c == '\r' { ' ' } else { c });
    }
    if chars.next().is_some() {
        out.push_str("...");
    }
    out
}
