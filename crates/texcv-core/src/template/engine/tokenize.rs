//! Placeholder tokenization
//!
//! A forward-only scan: the position never moves backward and replacement
//! text is never fed back into the stream.

use crate::template::placeholder::Placeholder;

/// Token classification
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    /// `{{NAME}}` with a name from the known set
    Known(Placeholder),

    /// Well-formed `{{NAME}}` whose name is not in the known set
    Unknown(String),
}

/// A single `{{NAME}}` token
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    /// Absolute byte position of `{{`
    pub start: usize,
    /// Total length in bytes including `{{` and `}}`
    pub length: usize,
    /// Line number where the token starts
    pub line: usize,
}

impl Token {
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

fn is_name_start(b: u8) -> bool {
    b.is_ascii_uppercase()
}

fn is_name_continue(b: u8) -> bool {
    b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_'
}

/// Iterator over placeholder tokens in a template string
///
/// Anything that is not exactly `{{` + `[A-Z][A-Z0-9_]*` + `}}` is plain
/// text. On a failed match the scan resumes one byte after the first `{`, so
/// a LaTeX group wrapped around a token (`{{{NAME}}}`) still yields it.
pub(crate) struct TokenStream<'a> {
    text: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> TokenStream<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            line: 1,
        }
    }

    /// Try to read `NAME}}` right after the `{{` at `open`
    ///
    /// Returns the name and the byte position just past `}}`.
    fn read_token(&self, open: usize) -> Option<(&'a str, usize)> {
        let bytes = self.text.as_bytes();
        let name_start = open + 2;

        if !bytes.get(name_start).copied().is_some_and(is_name_start) {
            return None;
        }

        let mut cursor = name_start + 1;
        while bytes.get(cursor).copied().is_some_and(is_name_continue) {
            cursor += 1;
        }

        if bytes.get(cursor..cursor + 2) == Some(b"}}".as_slice()) {
            Some((&self.text[name_start..cursor], cursor + 2))
        } else {
            None
        }
    }

    fn advance_to(&mut self, pos: usize) {
        self.line += self.text[self.pos..pos].matches('\n').count();
        self.pos = pos;
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while self.pos < self.text.len() {
            let open = self.pos + self.text[self.pos..].find("{{")?;
            self.advance_to(open);

            match self.read_token(open) {
                Some((name, end)) => {
                    let kind = match Placeholder::from_name(name) {
                        Some(placeholder) => TokenKind::Known(placeholder),
                        None => TokenKind::Unknown(name.to_string()),
                    };
                    let token = Token {
                        kind,
                        start: open,
                        length: end - open,
                        line: self.line,
                    };
                    self.advance_to(end);
                    return Some(token);
                }
                None => self.advance_to(open + 1),
            }
        }
        None
    }
}
