//! Core library for texcv: résumé data model, configuration, labels,
//! LaTeX escaping and formatting, placeholder templates and the renderer.

pub mod config;
pub mod error;
pub mod escape;
pub mod format;
pub mod labels;
pub mod model;
pub mod project;
pub mod render;
pub mod section;
pub mod template;

// Re-export commonly used types
pub use error::{Result, TexcvError};
