use crate::resolve::resolve_compiler;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use crate::Result;

/// A resolved compiler and the version it reports
#[derive(Debug, Clone, Serialize)]
pub struct CompilerInfo {
    pub program: String,
    pub path: PathBuf,
    /// First line of `<program> --version`, when it answers
    pub version: Option<String>,
}

impl CompilerInfo {
    /// Resolve `program` and ask it for its version
    ///
    /// A compiler that cannot report a version is still usable; only a
    /// missing program is an error.
    pub fn probe(program: &str) -> Result<Self> {
        let path = resolve_compiler(program)?;

        let version = Command::new(&path)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .ok()
            .filter(|output| output.status.success())
            .and_then(|output| parse_version_line(&String::from_utf8_lossy(&output.stdout)));

        if version.is_none() {
            log::debug!("'{}' did not report a version", path.display());
        }

        Ok(Self {
            program: program.to_string(),
            path,
            version,
        })
    }
}

impl fmt::Display for CompilerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{} ({})", self.path.display(), version),
            None => write!(f, "{}", self.path.display()),
        }
    }
}

/// First non-empty line of `--version` output
///
/// e.g. "XeTeX 3.141592653-2.6-0.999995 (TeX Live 2023)"
fn parse_version_line(output: &str) -> Option<String> {
    output
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
