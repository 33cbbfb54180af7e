//! Constants shared across the workspace

/// File and directory names inside a texcv project
pub mod paths {
    /// Configuration file at the project root
    pub const CONFIG_FILE: &str = "texcv.toml";

    /// Directory holding `cv-<lang>.json` data files
    pub const DATA_DIR: &str = "data";

    /// Directory holding `<name>.tex` templates and their support files
    pub const TEMPLATE_DIR: &str = "template";

    /// Template used when the configured one does not exist
    pub const FALLBACK_TEMPLATE: &str = "cv";

    /// Default output directory, relative to the project root
    pub const OUTPUT_DIR: &str = "output";
}

/// Environment variables read at startup
pub mod env {
    /// Overrides `compiler.program`
    pub const LATEX_PROGRAM: &str = "TEXCV_LATEX";

    /// Overrides the default output directory
    pub const OUTPUT_DIR: &str = "TEXCV_OUTPUT_DIR";
}

/// Font sizes supported by the shipped templates (points)
pub const FONT_SIZES: [u8; 3] = [10, 11, 12];

/// Language used when none is given and for label fallback
pub const DEFAULT_LANGUAGE: &str = "en";
