use crate::resolve::resolve_compiler;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;
use texcv_core::config::CompilerConfig;
use texcv_core::render::RenderedDocument;
use texcv_core::{Result, TexcvError};

/// Auxiliary outputs removed after a successful build
const AUXILIARY_EXTENSIONS: &[&str] = &["aux", "out", "toc"];

/// Options for compiling a rendered document
#[derive(Debug, Clone)]
pub struct CompileOptions {
    pub program: String,
    pub args: Vec<String>,
    pub passes: u32,
    /// Files copied next to the document before the first pass
    pub support_files: Vec<PathBuf>,
    pub keep_intermediates: bool,
}

impl CompileOptions {
    pub fn from_config(
        config: &CompilerConfig,
        support_files: Vec<PathBuf>,
        keep_intermediates: bool,
    ) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
            passes: config.passes,
            support_files,
            keep_intermediates,
        }
    }
}

/// Result of running the compiler
///
/// A non-zero exit is reported here rather than as an error; the caller
/// decides how to surface it.
#[derive(Debug, Clone)]
pub struct CompileResult {
    /// Exit code of the last pass that ran (-1 when killed by a signal)
    pub exit_code: i32,
    /// Content of `cv-<lang>.log`, or stdout followed by stderr when the
    /// compiler wrote no log
    pub log_text: String,
    /// `cv-<lang>.log`, when the compiler wrote one
    pub log_path: Option<PathBuf>,
    pub artifact: Option<PathBuf>,
    /// Passes actually run
    pub passes: u32,
    pub duration_ms: u64,
}

impl CompileResult {
    /// Zero exit and a PDF on disk
    pub fn success(&self) -> bool {
        self.exit_code == 0 && self.artifact.is_some()
    }
}

/// Write `document` into `output_dir` and compile it
pub fn compile(
    document: &RenderedDocument,
    output_dir: &Path,
    options: &CompileOptions,
) -> Result<CompileResult> {
    let program = resolve_compiler(&options.program)?;

    fs::create_dir_all(output_dir)?;
    let stem = document.file_stem();
    let tex_name = format!("{}.tex", stem);
    fs::write(output_dir.join(&tex_name), &document.source)?;

    // The log and PDF must come from this run, not an earlier one
    let log_file = output_dir.join(format!("{}.log", stem));
    let pdf = output_dir.join(format!("{}.pdf", stem));
    remove_if_exists(&log_file)?;
    remove_if_exists(&pdf)?;

    let copied = copy_support_files(&options.support_files, output_dir)?;

    let start = Instant::now();
    let mut exit_code = 0;
    let mut captured = String::new();
    let mut passes = 0;

    for pass in 1..=options.passes {
        log::debug!(
            "pass {}/{}: {} {} {}",
            pass,
            options.passes,
            program.display(),
            options.args.join(" "),
            tex_name
        );

        let output = Command::new(&program)
            .args(&options.args)
            .arg(&tex_name)
            .current_dir(output_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                TexcvError::CompilerExecFailed(format!(
                    "failed to run '{}': {}",
                    program.display(),
                    e
                ))
            })?;

        passes = pass;
        exit_code = output.status.code().unwrap_or(-1);
        captured = format!(
            "{}{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );

        if !output.status.success() {
            log::warn!("compiler exited with code {} on pass {}", exit_code, pass);
            break;
        }
    }

    let duration_ms = start.elapsed().as_millis() as u64;

    let (log_text, log_path) = match fs::read(&log_file) {
        Ok(bytes) => (String::from_utf8_lossy(&bytes).into_owned(), Some(log_file)),
        Err(_) => (captured, None),
    };

    let artifact = (exit_code == 0 && pdf.is_file()).then_some(pdf);

    if artifact.is_some() && !options.keep_intermediates {
        remove_intermediates(output_dir, &stem, &copied);
    }

    Ok(CompileResult {
        exit_code,
        log_text,
        log_path,
        artifact,
        passes,
        duration_ms,
    })
}

fn remove_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            log::debug!("removed stale {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Copy support files into `output_dir`, returning the destinations written
///
/// A file that already lives in `output_dir` is left alone and not returned,
/// so cleanup never removes a source file.
fn copy_support_files(files: &[PathBuf], output_dir: &Path) -> Result<Vec<PathBuf>> {
    let output_dir = output_dir.canonicalize()?;
    let mut copied = Vec::new();

    for source in files {
        let Some(name) = source.file_name() else {
            continue;
        };
        let destination = output_dir.join(name);
        if source.canonicalize().is_ok_and(|s| s == destination) {
            continue;
        }

        fs::copy(source, &destination)?;
        log::debug!("copied support file {}", destination.display());
        copied.push(destination);
    }

    Ok(copied)
}

fn remove_intermediates(output_dir: &Path, stem: &str, copied: &[PathBuf]) {
    let auxiliary = AUXILIARY_EXTENSIONS
        .iter()
        .map(|ext| output_dir.join(format!("{}.{}", stem, ext)));

    for path in auxiliary.chain(copied.iter().cloned()) {
        match fs::remove_file(&path) {
            Ok(()) => log::debug!("removed {}", path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("could not remove {}: {}", path.display(), e),
        }
    }
}
