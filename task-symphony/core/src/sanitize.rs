/// Escapes text the way a browser serializes a text node back to markup.
///
/// Only `&`, `<`, `>` and the no-break space are rewritten; quotes are left
/// alone because text content never needs attribute escaping.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\u{a0}' => escaped.push_str("&nbsp;"),
            other => escaped.push(other),
        }
    }
    escaped
}
