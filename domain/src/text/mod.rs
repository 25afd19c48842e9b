//! HTML escaping for caller input and gateway output.

/// Escape the four HTML-significant characters `< > & "` in one pass.
///
/// The substitution is not idempotent: escaping `&lt;` again yields
/// `&amp;lt;`. Callers escape each value exactly once.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}
