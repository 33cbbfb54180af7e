//! LaTeX compiler resolution and invocation for texcv.
//!
//! - [`resolve`]: locate the configured compiler with `which`
//! - [`info`]: describe a resolved compiler (path and version line)
//! - [`exec`]: write the rendered document and run the compiler passes
//!
//! # Compile Flow
//!
//! ```text
//! compile()
//!     ↓
//! 1. resolve_compiler(program)      → COMPILER_NOT_FOUND
//!     ↓
//! 2. write <out>/cv-<lang>.tex, copy support files
//!     ↓
//! 3. run <program> <args…> cv-<lang>.tex, `passes` times
//!     → stop at the first non-zero exit
//!     ↓
//! 4. read cv-<lang>.log (or captured output)
//!     ↓
//! 5. on success: remove .aux/.out/.toc and copied support files
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use texcv_core::render::RenderedDocument;
//! use texcv_latex::{CompileOptions, compile};
//! use std::path::Path;
//!
//! # fn main() -> texcv_core::Result<()> {
//! let document = RenderedDocument {
//!     language: "en".to_string(),
//!     source: "\\documentclass{article}\\begin{document}Hi\\end{document}".to_string(),
//! };
//! let options = CompileOptions {
//!     program: "xelatex".to_string(),
//!     args: vec!["-interaction=nonstopmode".to_string()],
//!     passes: 2,
//!     support_files: Vec::new(),
//!     keep_intermediates: false,
//! };
//!
//! let result = compile(&document, Path::new("output"), &options)?;
//! if !result.success() {
//!     eprintln!("exit code {}\n{}", result.exit_code, result.log_text);
//! }
//! # Ok(())
//! # }
//! ```

pub mod exec;
pub mod info;
pub mod resolve;

pub use exec::{CompileOptions, CompileResult, compile};
pub use info::CompilerInfo;
pub use resolve::resolve_compiler;

/// Errors surface as [`texcv_core::TexcvError`]
pub type Result<T> = texcv_core::Result<T>;
