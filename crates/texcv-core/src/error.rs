use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TexcvError {
    // Resume errors
    #[error("RESUME_INVALID: failed to parse '{path}': {reason}")]
    ResumeParse { path: PathBuf, reason: String },

    #[error("RESUME_MISSING_IDENTITY: basics.{0} is required")]
    MissingIdentity(String),

    #[error("DATA_NOT_FOUND: resume data file '{0}' not found")]
    DataNotFound(PathBuf),

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    #[error("CONFIG_UNKNOWN_SECTION: section '{0}' is not a known section")]
    UnknownSection(String),

    // Label errors
    #[error("LABEL_NOT_FOUND: no label '{key}' for language '{language}'")]
    LabelNotFound { language: String, key: String },

    // Template errors
    #[error("TEMPLATE_NOT_FOUND: template '{0}' not found")]
    TemplateNotFound(PathBuf),

    // Compiler errors
    #[error("COMPILER_NOT_FOUND: '{program}' not found on PATH")]
    CompilerNotFound { program: String },

    #[error("COMPILER_EXEC_FAILED: {0}")]
    CompilerExecFailed(String),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

impl TexcvError {
    /// Whether the error was caused by the user's input files rather than the toolchain
    pub fn is_input_error(&self) -> bool {
        !matches!(
            self,
            TexcvError::CompilerNotFound { .. }
                | TexcvError::CompilerExecFailed(_)
                | TexcvError::IoError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TexcvError>;
