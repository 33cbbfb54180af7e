//! Unit tests for TokenStream

use super::tokenize::{TokenKind, TokenStream};
use crate::section::SectionKey;
use crate::template::placeholder::Placeholder;

#[test]
fn test_tokenstream_single_placeholder() {
    let text = "Hello {{NAME}} world";
    let tokens: Vec<_> = TokenStream::new(text).collect();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Known(Placeholder::Name));
    assert_eq!(tokens[0].start, 6);
    assert_eq!(tokens[0].length, 8);
    assert_eq!(&text[tokens[0].start..tokens[0].end()], "{{NAME}}");
}

#[test]
fn test_tokenstream_multiple_tokens_in_order() {
    let text = "{{LABEL_SKILLS}}{{SKILLS}} {{FOO}}";
    let kinds: Vec<_> = TokenStream::new(text).map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Known(Placeholder::Label(SectionKey::Skills)),
            TokenKind::Known(Placeholder::Section(SectionKey::Skills)),
            TokenKind::Unknown("FOO".to_string()),
        ]
    );
}

#[test]
fn test_tokenstream_line_numbers() {
    let text = "line 1\nline 2 {{NAME}}\n\nline 4 {{EMAIL}}";
    let lines: Vec<_> = TokenStream::new(text).map(|t| t.line).collect();
    assert_eq!(lines, vec![2, 4]);
}

#[test]
fn test_tokenstream_skips_malformed() {
    let text = "{{ NAME }} {{name}} {{1X}} {{NAME";
    assert_eq!(TokenStream::new(text).count(), 0);
}

#[test]
fn test_tokenstream_resumes_after_first_brace() {
    let text = "{{{NAME}}}";
    let tokens: Vec<_> = TokenStream::new(text).collect();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].start, 1);
    assert_eq!(tokens[0].end(), 9);
}

#[test]
fn test_tokenstream_empty() {
    assert_eq!(TokenStream::new("").count(), 0);
    assert_eq!(TokenStream::new("no braces").count(), 0);
}
