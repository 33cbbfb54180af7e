//! Global context for CLI commands

use anyhow::Result;
use colored::Colorize;
use std::env;
use std::path::PathBuf;
use texcv_core::config::Config;
use texcv_core::config::consts::env as env_vars;
use texcv_core::labels::LabelTable;
use texcv_core::model::Resume;
use texcv_core::project::{Project, read_template, validate_language_code};
use texcv_core::render::{RenderedDocument, Renderer};

/// Flags shared by every command
pub struct GlobalArgs {
    pub project: PathBuf,
    pub config: Option<PathBuf>,
    pub verbose: bool,
}

/// Project, configuration and labels, loaded once per invocation
pub struct Context {
    pub project: Project,
    pub config: Config,
    pub labels: LabelTable,
    pub verbose: bool,
}

impl Context {
    /// Load configuration and build the label table
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be parsed or is invalid
    /// - A label override names an unknown key
    pub fn new(args: &GlobalArgs) -> Result<Self> {
        let project = Project::new(&args.project);
        let config_path = Self::config_path(args);

        let config = Config::load(&config_path)?.with_env_overrides();
        let labels = LabelTable::builtin().with_overrides(&config.labels)?;

        Ok(Self {
            project,
            config,
            labels,
            verbose: args.verbose,
        })
    }

    /// Built-in configuration and labels, for reporting when loading failed
    pub fn with_defaults(args: &GlobalArgs) -> Self {
        Self {
            project: Project::new(&args.project),
            config: Config::default().with_env_overrides(),
            labels: LabelTable::builtin(),
            verbose: args.verbose,
        }
    }

    /// `--config`, or `<project>/texcv.toml`
    pub fn config_path(args: &GlobalArgs) -> PathBuf {
        args.config
            .clone()
            .unwrap_or_else(|| Project::new(&args.project).config_path())
    }

    /// Requested language, or the configured default
    pub fn language(&self, requested: Option<String>) -> Result<String> {
        let language = requested.unwrap_or_else(|| self.config.default_language.clone());
        validate_language_code(&language)?;
        Ok(language)
    }

    /// `--output` flag, then `TEXCV_OUTPUT_DIR`, then `<project>/output`
    pub fn output_dir(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| {
            env::var_os(env_vars::OUTPUT_DIR)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| self.project.default_output_dir())
    }

    /// Load data and template for `language` and fill the template
    pub fn render(&self, language: &str) -> Result<RenderedDocument> {
        let data_path = self.project.data_path(language);
        self.step(format!("Loading {}", data_path.display()));
        let resume = Resume::from_file(&data_path)?;

        let template_path = self.project.resolve_template(&self.config.template)?;
        self.step(format!("Using template {}", template_path.display()));
        let template = read_template(&template_path)?;

        let renderer = Renderer::new(&self.config, &self.labels, language);
        Ok(renderer.render(&resume, &template)?)
    }

    /// Progress line on stderr, shown with --verbose
    ///
    /// Kept off stdout so `render --stdout` output stays a clean document.
    pub fn step(&self, message: impl AsRef<str>) {
        if self.verbose {
            eprintln!("{} {}", "→".cyan(), message.as_ref());
        }
    }
}
