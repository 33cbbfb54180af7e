//! Template module - restricted placeholder substitution
//!
//! Templates are LaTeX files containing `{{NAME}}` tokens. Substitution is a
//! single linear scan; there are no conditionals, loops or expressions.
//!
//! ## Syntax
//!
//! - A token is `{{` + `[A-Z][A-Z0-9_]*` + `}}`, no inner whitespace
//! - Known names are replaced (empty string when no value is set)
//! - Unknown names, lowercase names and any other brace sequence are copied
//!   unchanged, so ordinary LaTeX groups such as `{{\bf x}}` are safe
//!
//! Values are escaped before they reach the engine, which means user text can
//! never contain a `{{` and cannot produce a token.

pub mod engine;
pub mod placeholder;

pub use engine::{render, TemplateContext, TemplateEngine};
pub use placeholder::Placeholder;
