//! Doctor command - project and environment health check

use crate::context::{Context, GlobalArgs};
use crate::output::print_json;
use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use texcv_core::model::Resume;
use texcv_latex::CompilerInfo;

/// Doctor command JSON output schema
#[derive(Debug, Serialize, Deserialize)]
struct DoctorOutput {
    schema_version: String,
    project: ProjectInfo,
    timestamp: String,
    checks: Vec<Check>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ProjectInfo {
    root: String,
    default_language: String,
    languages: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Check {
    id: String,
    name: String,
    status: CheckStatus,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum CheckStatus {
    Ok,
    Warning,
    Error,
}

impl Check {
    fn new(id: &str, name: &str, status: CheckStatus, message: String) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            status,
            message,
            details: None,
        }
    }

    fn with_detail(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.details
            .get_or_insert_with(BTreeMap::new)
            .insert(key.to_string(), value.into());
        self
    }
}

/// Run the health check
///
/// Always returns Ok(()) - doctor reports problems instead of failing.
/// When the configuration cannot be loaded the remaining checks run
/// against the built-in defaults.
pub fn run(args: &GlobalArgs, json: bool) -> Result<()> {
    let mut checks = Vec::new();

    let config_path = Context::config_path(args);
    let ctx = match Context::new(args) {
        Ok(ctx) => {
            let message = if config_path.exists() {
                format!("{} is valid", config_path.display())
            } else {
                format!("{} not found, using defaults", config_path.display())
            };
            let status = if config_path.exists() {
                CheckStatus::Ok
            } else {
                CheckStatus::Warning
            };
            checks.push(Check::new("config_valid", "Configuration file", status, message));
            ctx
        }
        Err(e) => {
            checks.push(Check::new(
                "config_valid",
                "Configuration file",
                CheckStatus::Error,
                format!("Failed to load config: {}", e),
            ));
            Context::with_defaults(args)
        }
    };

    let language = ctx.config.default_language.clone();
    checks.push(check_labels(&ctx, &language));
    checks.push(check_data(&ctx, &language));
    checks.push(check_template(&ctx));
    checks.push(check_compiler(&ctx));

    let output = DoctorOutput {
        schema_version: "1.0".to_string(),
        project: ProjectInfo {
            root: ctx.project.root.display().to_string(),
            default_language: language,
            languages: ctx.project.available_languages().unwrap_or_default(),
        },
        timestamp: Utc::now().to_rfc3339(),
        checks,
    };

    if json {
        print_json(&serde_json::to_string_pretty(&output)?)?;
    } else {
        print_human_readable(&output);
    }

    Ok(())
}

fn check_labels(ctx: &Context, language: &str) -> Check {
    if ctx.labels.has_language(language) {
        Check::new(
            "labels",
            "Section labels",
            CheckStatus::Ok,
            format!("labels available for '{}'", language),
        )
    } else {
        Check::new(
            "labels",
            "Section labels",
            CheckStatus::Warning,
            format!("no labels for '{}', English will be used", language),
        )
        .with_detail(
            "available",
            ctx.labels.languages().collect::<Vec<_>>().join(", "),
        )
    }
}

fn check_data(ctx: &Context, language: &str) -> Check {
    let path = ctx.project.data_path(language);
    match Resume::from_file(&path) {
        Ok(_) => Check::new(
            "data_file",
            "Data file",
            CheckStatus::Ok,
            format!("{} parsed", path.display()),
        ),
        Err(e) => Check::new("data_file", "Data file", CheckStatus::Error, e.to_string())
            .with_detail("path", path.display().to_string()),
    }
}

fn check_template(ctx: &Context) -> Check {
    let requested = &ctx.config.template;
    match ctx.project.resolve_template(requested) {
        Ok(path) => {
            let is_fallback = path
                .file_stem()
                .is_some_and(|stem| stem.to_string_lossy() != requested.as_str());
            let support = ctx.project.support_files().unwrap_or_default();

            let check = if is_fallback {
                Check::new(
                    "template",
                    "Template",
                    CheckStatus::Warning,
                    format!("'{}' not found, falling back to {}", requested, path.display()),
                )
            } else {
                Check::new(
                    "template",
                    "Template",
                    CheckStatus::Ok,
                    path.display().to_string(),
                )
            };
            check.with_detail("support_files", support.len())
        }
        Err(e) => Check::new("template", "Template", CheckStatus::Error, e.to_string()),
    }
}

fn check_compiler(ctx: &Context) -> Check {
    let program = &ctx.config.compiler.program;
    match CompilerInfo::probe(program) {
        Ok(info) => {
            let check = Check::new(
                "compiler_available",
                "LaTeX compiler",
                CheckStatus::Ok,
                format!("{} available", program),
            )
            .with_detail("path", info.path.display().to_string());
            match info.version {
                Some(version) => check.with_detail("version", version),
                None => check,
            }
        }
        Err(e) => Check::new(
            "compiler_available",
            "LaTeX compiler",
            CheckStatus::Error,
            e.to_string(),
        ),
    }
}

/// Print human-readable output
fn print_human_readable(output: &DoctorOutput) {
    println!("{}", "Environment Health Check".bold());
    println!();

    println!("{}", "Project:".bold());
    println!("  Root: {}", output.project.root);
    println!("  Default language: {}", output.project.default_language);
    if !output.project.languages.is_empty() {
        println!("  Data files: {}", output.project.languages.join(", "));
    }
    println!();

    println!("{}", "Checks:".bold());
    for check in &output.checks {
        let status_str = match check.status {
            CheckStatus::Ok => "✓".green(),
            CheckStatus::Warning => "⚠".yellow(),
            CheckStatus::Error => "✗".red(),
        };

        println!("  {} {}: {}", status_str, check.name.bold(), check.message);

        if let Some(details) = &check.details {
            for (key, value) in details {
                println!("      {}: {}", key, value);
            }
        }
    }

    println!();
    println!("Timestamp: {}", output.timestamp);
}
