//! Build command - render résumés and compile them to PDF

use crate::context::{Context, GlobalArgs};
use crate::output::{LOG_TAIL_LINES, tail};
use anyhow::{Result, bail};
use colored::Colorize;
use std::path::{Path, PathBuf};
use texcv_core::TexcvError;
use texcv_latex::{CompileOptions, CompileResult, compile};

/// Build every requested language
///
/// Languages are processed in order and independently: a failure is
/// reported and the remaining languages are still attempted.
///
/// # Arguments
///
/// * `languages` - Language codes; empty means the configured default
/// * `output` - Output directory override
/// * `keep_intermediates` - Keep auxiliary and copied support files
pub fn run(
    args: &GlobalArgs,
    languages: Vec<String>,
    output: Option<PathBuf>,
    keep_intermediates: bool,
) -> Result<()> {
    let ctx = Context::new(args)?;

    let languages = if languages.is_empty() {
        vec![ctx.language(None)?]
    } else {
        languages
            .into_iter()
            .map(|l| ctx.language(Some(l)))
            .collect::<Result<Vec<_>>>()?
    };

    let output_dir = ctx.output_dir(output);
    let options = CompileOptions::from_config(
        &ctx.config.compiler,
        ctx.project.support_files()?,
        keep_intermediates || ctx.config.output.keep_intermediates,
    );

    let mut failed = Vec::new();
    for language in &languages {
        match build_language(&ctx, language, &output_dir, &options) {
            Ok(true) => {}
            Ok(false) => failed.push(language.as_str()),
            Err(e) => {
                eprintln!("{} {}: {}", "✗".red().bold(), language, e);
                let input_error = e
                    .downcast_ref::<TexcvError>()
                    .is_some_and(TexcvError::is_input_error);
                if input_error {
                    eprintln!("  compiler was not invoked");
                }
                failed.push(language.as_str());
            }
        }
    }

    if !failed.is_empty() {
        bail!("build failed for: {}", failed.join(", "));
    }
    Ok(())
}

/// Returns `Ok(false)` when the compiler ran but did not produce a PDF
fn build_language(
    ctx: &Context,
    language: &str,
    output_dir: &Path,
    options: &CompileOptions,
) -> Result<bool> {
    ctx.step(format!("Rendering '{}'", language));
    let document = ctx.render(language)?;

    ctx.step(format!(
        "Compiling {}.tex in {} ({} pass(es) of {})",
        document.file_stem(),
        output_dir.display(),
        options.passes,
        options.program
    ));
    let result = compile(&document, output_dir, options)?;

    match &result.artifact {
        Some(pdf) if result.success() => {
            println!(
                "{} Built '{}' to {} ({}ms)",
                "✓".green().bold(),
                language,
                pdf.display(),
                result.duration_ms
            );
            Ok(true)
        }
        _ => {
            report_failure(language, &result);
            Ok(false)
        }
    }
}

fn report_failure(language: &str, result: &CompileResult) {
    eprintln!("{} Build failed for '{}'", "✗".red().bold(), language);
    eprintln!("Exit code: {}", result.exit_code);
    if result.exit_code == 0 {
        eprintln!("The compiler reported success but produced no PDF");
    }

    match &result.log_path {
        Some(path) => eprintln!("Log: {}", path.display()),
        None => eprintln!("Log: none written, showing compiler output"),
    }

    let excerpt = tail(&result.log_text, LOG_TAIL_LINES);
    if !excerpt.is_empty() {
        eprintln!("Last {} lines:", LOG_TAIL_LINES);
        eprint!("{}", excerpt);
        if !excerpt.ends_with('\n') {
            eprintln!();
        }
    }
}
