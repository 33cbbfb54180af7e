use super::consts;
use crate::error::{Result, TexcvError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// texcv.toml schema
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Template name, resolved to `template/<name>.tex`
    #[serde(default = "default_template")]
    pub template: String,
    #[serde(default)]
    pub color: ColorScheme,
    #[serde(default = "default_font_size")]
    pub font_size: u8,
    #[serde(default = "default_true")]
    pub show_technologies: bool,
    /// 0 = unlimited
    #[serde(default)]
    pub max_highlights_per_job: usize,
    #[serde(default = "default_language")]
    pub default_language: String,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default)]
    pub sections: SectionsConfig,
    #[serde(default)]
    pub compiler: CompilerConfig,
    #[serde(default)]
    pub output: OutputConfig,
    /// Per-language label overrides: `[labels.en] experience = "..."`
    #[serde(default)]
    pub labels: BTreeMap<String, BTreeMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template: default_template(),
            color: ColorScheme::default(),
            font_size: default_font_size(),
            show_technologies: true,
            max_highlights_per_job: 0,
            default_language: default_language(),
            margins: Margins::default(),
            sections: SectionsConfig::default(),
            compiler: CompilerConfig::default(),
            output: OutputConfig::default(),
            labels: BTreeMap::new(),
        }
    }
}

/// Accent colors understood by the shipped templates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Skyblue,
    Red,
    Nephritis,
    Concrete,
    Darknight,
    Emerald,
    Pink,
    Orange,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Skyblue => "skyblue",
            ColorScheme::Red => "red",
            ColorScheme::Nephritis => "nephritis",
            ColorScheme::Concrete => "concrete",
            ColorScheme::Darknight => "darknight",
            ColorScheme::Emerald => "emerald",
            ColorScheme::Pink => "pink",
            ColorScheme::Orange => "orange",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Page margins in centimetres
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Margins {
    #[serde(default = "default_margin_top")]
    pub top: f64,
    #[serde(default = "default_margin_bottom")]
    pub bottom: f64,
    #[serde(default = "default_margin_side")]
    pub left: f64,
    #[serde(default = "default_margin_side")]
    pub right: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: default_margin_top(),
            bottom: default_margin_bottom(),
            left: default_margin_side(),
            right: default_margin_side(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionsConfig {
    /// Render order; names are validated at render time
    #[serde(default = "default_section_order")]
    pub order: Vec<String>,
    #[serde(default)]
    pub hidden: Vec<String>,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            order: default_section_order(),
            hidden: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompilerConfig {
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default = "default_compiler_args")]
    pub args: Vec<String>,
    /// Number of compiler runs (cross-references need two)
    #[serde(default = "default_passes")]
    pub passes: u32,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_compiler_args(),
            passes: default_passes(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OutputConfig {
    /// Keep auxiliary files and copied template support files after a build
    #[serde(default)]
    pub keep_intermediates: bool,
}

fn default_template() -> String {
    consts::paths::FALLBACK_TEMPLATE.to_string()
}

fn default_font_size() -> u8 {
    11
}

fn default_true() -> bool {
    true
}

fn default_language() -> String {
    consts::DEFAULT_LANGUAGE.to_string()
}

fn default_margin_top() -> f64 {
    0.8
}

fn default_margin_bottom() -> f64 {
    1.8
}

fn default_margin_side() -> f64 {
    1.4
}

fn default_section_order() -> Vec<String> {
    [
        "summary",
        "experience",
        "education",
        "skills",
        "languages",
        "projects",
        "volunteer",
        "awards",
        "certificates",
        "publications",
        "references",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_program() -> String {
    "xelatex".to_string()
}

fn default_compiler_args() -> Vec<String> {
    vec!["-interaction=nonstopmode".to_string()]
}

fn default_passes() -> u32 {
    2
}

impl Config {
    /// Load texcv.toml, falling back to built-in defaults when the file is absent
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!(
                "configuration file '{}' not found, using built-in defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        Self::from_file(path)
    }

    /// Read and parse texcv.toml; the file must exist
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| TexcvError::ConfigParseError(format!("{}: {}", path.display(), e)))?;

        let config = Self::from_toml(&content)?;
        log::debug!("loaded configuration from '{}'", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| TexcvError::ConfigParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `TEXCV_LATEX` on top of the file configuration
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(program) = std::env::var(consts::env::LATEX_PROGRAM) {
            if !program.trim().is_empty() {
                log::debug!("compiler program overridden by environment: {}", program);
                self.compiler.program = program;
            }
        }
        self
    }

    /// Check value ranges serde cannot express
    pub fn validate(&self) -> Result<()> {
        if !consts::FONT_SIZES.contains(&self.font_size) {
            return Err(invalid(
                "font_size",
                format!("{} is not one of {:?}", self.font_size, consts::FONT_SIZES),
            ));
        }

        let margins = [
            ("margins.top", self.margins.top),
            ("margins.bottom", self.margins.bottom),
            ("margins.left", self.margins.left),
            ("margins.right", self.margins.right),
        ];
        for (field, value) in margins {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, format!("{} must be a non-negative number", value)));
            }
        }

        if self.compiler.program.trim().is_empty() {
            return Err(invalid("compiler.program", "must not be empty".to_string()));
        }
        if self.compiler.passes == 0 {
            return Err(invalid("compiler.passes", "must be at least 1".to_string()));
        }
        if self.default_language.trim().is_empty() {
            return Err(invalid("default_language", "must not be empty".to_string()));
        }

        Ok(())
    }
}

fn invalid(field: &str, reason: String) -> TexcvError {
    TexcvError::ConfigInvalidValue {
        field: field.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use texcv_testkit::{temp_dir_in_workspace, with_env_var};

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.template, "cv");
        assert_eq!(config.color, ColorScheme::Skyblue);
        assert_eq!(config.compiler.passes, 2);
        assert_eq!(config.sections.order.len(), 11);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
template = "awesome-cv"
color = "emerald"
font_size = 10
show_technologies = false
max_highlights_per_job = 3
default_language = "it"

[margins]
top = 1.0
bottom = 2.0
left = 1.5
right = 1.5

[sections]
order = ["experience", "summary"]
hidden = ["summary"]

[compiler]
program = "lualatex"
args = ["-interaction=batchmode"]
passes = 1

[output]
keep_intermediates = true

[labels.en]
experience = "Work History"
"#;
        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.template, "awesome-cv");
        assert_eq!(config.color, ColorScheme::Emerald);
        assert_eq!(config.font_size, 10);
        assert!(!config.show_technologies);
        assert_eq!(config.max_highlights_per_job, 3);
        assert_eq!(config.margins.left, 1.5);
        assert_eq!(config.sections.order, vec!["experience", "summary"]);
        assert_eq!(config.sections.hidden, vec!["summary"]);
        assert_eq!(config.compiler.program, "lualatex");
        assert!(config.output.keep_intermediates);
        assert_eq!(config.labels["en"]["experience"], "Work History");
    }

    #[test]
    fn test_partial_margins_keep_defaults() {
        let config = Config::from_toml("[margins]\ntop = 2.5\n").unwrap();
        assert_eq!(config.margins.top, 2.5);
        assert_eq!(config.margins.bottom, 1.8);
        assert_eq!(config.margins.left, 1.4);
    }

    #[test]
    fn test_unknown_color_is_parse_error() {
        let err = Config::from_toml("color = \"magenta\"").unwrap_err();
        assert!(matches!(err, TexcvError::ConfigParseError(_)));
    }

    #[test]
    fn test_negative_highlight_cap_is_parse_error() {
        let err = Config::from_toml("max_highlights_per_job = -1").unwrap_err();
        assert!(matches!(err, TexcvError::ConfigParseError(_)));
    }

    #[test]
    fn test_invalid_font_size() {
        let err = Config::from_toml("font_size = 14").unwrap_err();
        match err {
            TexcvError::ConfigInvalidValue { field, .. } => assert_eq!(field, "font_size"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_margin() {
        let err = Config::from_toml("[margins]\nleft = -0.5\n").unwrap_err();
        match err {
            TexcvError::ConfigInvalidValue { field, .. } => assert_eq!(field, "margins.left"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_passes() {
        let err = Config::from_toml("[compiler]\npasses = 0\n").unwrap_err();
        assert!(matches!(err, TexcvError::ConfigInvalidValue { .. }));
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let temp = temp_dir_in_workspace();
        let config = Config::load(temp.path().join("texcv.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_existing_file() {
        let temp = temp_dir_in_workspace();
        let path = temp.path().join("texcv.toml");
        fs::write(&path, "color = \"red\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.color, ColorScheme::Red);
    }

    #[test]
    fn test_load_malformed_file_is_fatal() {
        let temp = temp_dir_in_workspace();
        let path = temp.path().join("texcv.toml");
        fs::write(&path, "color = [").unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_env_overrides_compiler_program() {
        let config = with_env_var(consts::env::LATEX_PROGRAM, Some("lualatex"), || {
            Config::default().with_env_overrides()
        });
        assert_eq!(config.compiler.program, "lualatex");
    }

    #[test]
    fn test_blank_env_override_is_ignored() {
        let config = with_env_var(consts::env::LATEX_PROGRAM, Some("  "), || {
            Config::default().with_env_overrides()
        });
        assert_eq!(config.compiler.program, "xelatex");
    }

    #[test]
    fn test_color_display() {
        assert_eq!(ColorScheme::Darknight.to_string(), "darknight");
    }
}
