//! Stand-in LaTeX compilers
//!
//! Each script appends its arguments to `passes.txt` in the working
//! directory, one line per run, so tests can count passes.

use std::fs;
use std::path::{Path, PathBuf};

/// Behaviour of a fake compiler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeCompiler {
    /// Writes `<stem>.log`, `<stem>.aux` and `<stem>.pdf`, exits 0
    Succeeds,
    /// Writes a `<stem>.log` with a LaTeX error, exits 1
    FailsWithLog,
    /// Prints to stdout and stderr without writing a log, exits 2
    FailsWithoutLog,
    /// Exits 0 without producing a PDF
    NoOutput,
}

const PREAMBLE: &str = r#"#!/bin/sh
for last; do :; done
stem="${last%.tex}"
echo "$@" >> passes.txt
"#;

impl FakeCompiler {
    fn body(&self) -> &'static str {
        match self {
            FakeCompiler::Succeeds => {
                r#"echo "This is FakeTeX, processing $last" > "$stem.log"
echo "Output written on $stem.pdf (1 page)." >> "$stem.log"
echo "relax" > "$stem.aux"
echo "%PDF-1.5" > "$stem.pdf"
echo "Output written on $stem.pdf"
exit 0
"#
            }
            FakeCompiler::FailsWithLog => {
                r#"echo "This is FakeTeX, processing $last" > "$stem.log"
echo "! Undefined control sequence." >> "$stem.log"
printf '%s\n' 'l.12 \badmacro' >> "$stem.log"
exit 1
"#
            }
            FakeCompiler::FailsWithoutLog => {
                r#"echo "fatal: cannot open format"
echo "fatal: giving up" >&2
exit 2
"#
            }
            FakeCompiler::NoOutput => "exit 0\n",
        }
    }
}

/// Write an executable script named `name` into `dir`
#[cfg(unix)]
pub fn write_fake_compiler(dir: &Path, name: &str, kind: FakeCompiler) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("{}{}", PREAMBLE, kind.body()))
        .expect("Failed to write fake compiler");
    let mut perms = fs::metadata(&path)
        .expect("Failed to get metadata")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("Failed to set permissions");
    path
}

/// Lines recorded by a fake compiler in `dir/passes.txt`
pub fn recorded_passes(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("passes.txt"))
        .map(|s| s.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
