use std::path::PathBuf;
use texcv_core::{Result, TexcvError};

/// Locate `program` on PATH (or accept it as a path to an executable)
pub fn resolve_compiler(program: &str) -> Result<PathBuf> {
    match which::which(program) {
        Ok(path) => {
            log::debug!("resolved compiler '{}' to {}", program, path.display());
            Ok(path)
        }
        Err(e) => {
            log::debug!("compiler '{}' not found: {}", program, e);
            Err(TexcvError::CompilerNotFound {
                program: program.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_missing_program() {
        let err = resolve_compiler("texcv-no-such-compiler-xyz").unwrap_err();
        match err {
            TexcvError::CompilerNotFound { program } => {
                assert_eq!(program, "texcv-no-such-compiler-xyz")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_resolve_absolute_path() {
        use texcv_testkit::{FakeCompiler, temp_dir_in_workspace, write_fake_compiler};

        let temp = temp_dir_in_workspace();
        let script = write_fake_compiler(temp.path(), "fake-latex", FakeCompiler::Succeeds);

        let resolved = resolve_compiler(script.to_str().unwrap()).unwrap();
        assert!(resolved.ends_with("fake-latex"));
    }

    #[test]
    #[cfg(unix)]
    fn test_resolve_non_executable_file() {
        use texcv_testkit::temp_dir_in_workspace;

        let temp = temp_dir_in_workspace();
        let path = temp.path().join("not-executable");
        std::fs::write(&path, "#!/bin/sh\n").unwrap();

        assert!(resolve_compiler(path.to_str().unwrap()).is_err());
    }
}
