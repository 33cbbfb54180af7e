//! Test utilities for texcv
//!
//! This crate provides shared testing utilities used across the texcv workspace.

mod compiler;
mod env;
mod fixtures;

pub use compiler::{FakeCompiler, recorded_passes};
#[cfg(unix)]
pub use compiler::write_fake_compiler;
pub use env::{ENV_LOCK, with_env_var};
pub use fixtures::{
    MINIMAL_RESUME, SAMPLE_CONFIG, SAMPLE_RESUME, SAMPLE_TEMPLATE, write_config, write_resume,
    write_sample_project, write_template,
};

use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the project root
///
/// This keeps all test temporary files in a single gitignored location.
///
/// # Panics
///
/// Panics if the current directory cannot be determined or `.tmp/` cannot
/// be created.
///
/// # Examples
///
/// ```rust
/// use texcv_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("test.txt");
/// std::fs::write(&file_path, "test data").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for callers that want to handle the error
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}
