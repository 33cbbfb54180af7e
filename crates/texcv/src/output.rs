use std::io::{self, Write};

/// Lines of compiler log shown when a build fails
pub const LOG_TAIL_LINES: usize = 50;

pub fn print_json(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")
}

/// Write `s` to stdout exactly as given
pub fn print_raw(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(s.as_bytes())?;
    out.flush()
}

/// Last `n` lines of `text`, verbatim
pub fn tail(text: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    let body = text.strip_suffix('\n').unwrap_or(text);
    match body.rmatch_indices('\n').nth(n - 1) {
        Some((i, _)) => &text[i + 1..],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_keeps_last_lines() {
        assert_eq!(tail("a\nb\nc\n", 2), "b\nc\n");
        assert_eq!(tail("a\nb\nc", 2), "b\nc");
        assert_eq!(tail("a\nb\nc\n", 1), "c\n");
    }

    #[test]
    fn test_tail_short_text() {
        assert_eq!(tail("a\nb\n", 50), "a\nb\n");
        assert_eq!(tail("", 50), "");
        assert_eq!(tail("a\n", 0), "");
    }
}
