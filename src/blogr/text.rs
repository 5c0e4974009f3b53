//! Escaping and truncation helpers used by the renderer.

/// Escapes `&`, `<`, `>` and `"` for safe interpolation into markup.
/// Ampersand first, so existing entities are not double-mangled backwards.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Cuts `content` to at most `budget` characters, appending an ellipsis when
/// anything was dropped. Counts `char`s, not bytes, so multi-byte text never
/// splits mid-character.
pub fn excerpt(content: &str, budget: usize) -> String {
    if content.chars().count() <= budget {
        return content.to_string();
    }
    let mut cut: String = content.chars().take(budget).collect();
    cut.push('…');
    cut
}
