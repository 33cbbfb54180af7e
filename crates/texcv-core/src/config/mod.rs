//! Configuration loaded from `texcv.toml`

pub mod consts;
mod model;

pub use model::{
    ColorScheme, CompilerConfig, Config, Margins, OutputConfig, SectionsConfig,
};
