//! LaTeX escaping for user-supplied text
//!
//! Both functions make a single pass over the input and look each character
//! up in a replacement table, so text introduced by a replacement is never
//! escaped a second time. Call them exactly once per field, after all other
//! formatting.

/// Replacement for a reserved LaTeX character, if any
fn text_replacement(c: char) -> Option<&'static str> {
    match c {
        '\\' => Some(r"\textbackslash{}"),
        '&' => Some(r"\&"),
        '%' => Some(r"\%"),
        '$' => Some(r"\$"),
        '#' => Some(r"\#"),
        '_' => Some(r"\_"),
        '{' => Some(r"\{"),
        '}' => Some(r"\}"),
        '~' => Some(r"\textasciitilde{}"),
        '^' => Some(r"\textasciicircum{}"),
        _ => None,
    }
}

/// Characters that break a `\href` target
fn url_replacement(c: char) -> Option<&'static str> {
    match c {
        '\\' | '%' | '#' | '{' | '}' => text_replacement(c),
        _ => None,
    }
}

fn escape_with(text: &str, table: fn(char) -> Option<&'static str>) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match table(c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    out
}

/// Escape text for use in LaTeX body content
pub fn escape(text: &str) -> String {
    escape_with(text, text_replacement)
}

/// Escape a URL for use as the first argument of `\href`
pub fn escape_url(url: &str) -> String {
    escape_with(url, url_replacement)
}
