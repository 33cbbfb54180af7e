//! Template engine implementation

mod tokenize;

use crate::template::placeholder::Placeholder;
use std::collections::BTreeMap;

use tokenize::{TokenKind, TokenStream};

/// Values for known placeholders
///
/// A known placeholder with no value resolves to the empty string, so a known
/// token never survives substitution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateContext {
    values: BTreeMap<Placeholder, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, placeholder: Placeholder, value: impl Into<String>) {
        self.values.insert(placeholder, value.into());
    }

    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        self.values.get(&placeholder).map(String::as_str)
    }
}

/// Single-pass placeholder substitution
pub struct TemplateEngine;

impl TemplateEngine {
    pub fn new() -> Self {
        Self
    }

    /// Replace every known `{{NAME}}` token in `template`
    ///
    /// Unknown tokens and every other brace sequence are copied unchanged.
    /// Substituted values are not rescanned.
    pub fn render(&self, template: &str, context: &TemplateContext) -> String {
        let mut output = String::with_capacity(template.len());
        let mut last = 0;

        for token in TokenStream::new(template) {
            output.push_str(&template[last..token.start]);

            match &token.kind {
                TokenKind::Known(placeholder) => {
                    output.push_str(context.get(*placeholder).unwrap_or_default());
                }
                TokenKind::Unknown(name) => {
                    log::debug!(
                        "leaving unknown placeholder {{{{{}}}}} at line {} untouched",
                        name,
                        token.line
                    );
                    output.push_str(&template[token.start..token.end()]);
                }
            }

            last = token.end();
        }

        output.push_str(&template[last..]);
        output
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to render a template
pub fn render(template: &str, context: &TemplateContext) -> String {
    TemplateEngine::new().render(template, context)
}

#[cfg(test)]
mod tests;
