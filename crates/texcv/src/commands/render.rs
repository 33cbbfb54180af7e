//! Render command - fill the template without compiling

use crate::context::{Context, GlobalArgs};
use crate::output::print_raw;
use anyhow::Result;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

/// Render one language to `cv-<lang>.tex`, or to stdout with `--stdout`
pub fn run(
    args: &GlobalArgs,
    language: Option<String>,
    output: Option<PathBuf>,
    stdout: bool,
) -> Result<()> {
    let ctx = Context::new(args)?;
    let language = ctx.language(language)?;
    let document = ctx.render(&language)?;

    if stdout {
        print_raw(&document.source)?;
        return Ok(());
    }

    let output_dir = ctx.output_dir(output);
    fs::create_dir_all(&output_dir)?;
    let path = output_dir.join(format!("{}.tex", document.file_stem()));
    fs::write(&path, &document.source)?;

    println!(
        "{} Rendered '{}' to {}",
        "✓".green().bold(),
        language,
        path.display()
    );
    Ok(())
}
