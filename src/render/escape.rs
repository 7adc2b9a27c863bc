//! HTML escaping for raw text content.

use std::borrow::Cow;

/// Escape the five HTML-reserved characters in `text`.
///
/// `&`, `<`, `>`, `"` and `'` become `&amp;`, `&lt;`, `&gt;`, `&quot;` and
/// `&#039;`. Everything else, including non-ASCII text, is left untouched.
/// Borrows the input when there is nothing to escape.
///
/// ```
/// use strapi_richtext::render::escape_html;
///
/// assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(is_reserved) {
        return Cow::Borrowed(text);
    }
    let mut output = String::with_capacity(text.len() + text.len() / 8);
    escape_html_into(text, &mut output);
    Cow::Owned(output)
}

/// Append the escaped form of `text` to `output`.
pub fn escape_html_into(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#039;"),
            _ => output.push(c),
        }
    }
}

fn is_reserved(c: char) -> bool {
    matches!(c, '&' | '<' | '>' | '"' | '\'')
}
