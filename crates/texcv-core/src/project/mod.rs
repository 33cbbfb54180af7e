//! Project layout: where data, templates and outputs live
//!
//! ```text
//! <root>/
//!   texcv.toml              optional configuration
//!   data/cv-<lang>.json     one data file per language
//!   template/<name>.tex     templates (+ .cls/.sty/fonts support files)
//!   output/                 default build output
//! ```

use crate::config::consts::paths;
use crate::error::{Result, TexcvError};
use std::fs;
use std::path::{Path, PathBuf};

/// File stem shared by the data file and every build output of a language
pub fn document_stem(language: &str) -> String {
    format!("cv-{}", language)
}

/// Language codes become file names; allow only `[A-Za-z0-9_-]`
pub fn validate_language_code(language: &str) -> Result<()> {
    let valid = !language.is_empty()
        && language
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');

    if valid {
        Ok(())
    } else {
        Err(TexcvError::ConfigInvalidValue {
            field: "language".to_string(),
            reason: format!("'{}' is not a valid language code", language),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
}

impl Project {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(paths::CONFIG_FILE)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join(paths::DATA_DIR)
    }

    /// `data/cv-<lang>.json`
    pub fn data_path(&self, language: &str) -> PathBuf {
        self.data_dir()
            .join(format!("{}.json", document_stem(language)))
    }

    pub fn template_dir(&self) -> PathBuf {
        self.root.join(paths::TEMPLATE_DIR)
    }

    pub fn default_output_dir(&self) -> PathBuf {
        self.root.join(paths::OUTPUT_DIR)
    }

    /// Resolve `template/<name>.tex`, falling back to `template/cv.tex`
    pub fn resolve_template(&self, name: &str) -> Result<PathBuf> {
        let requested = self.template_dir().join(format!("{}.tex", name));
        if requested.is_file() {
            return Ok(requested);
        }

        let fallback = self
            .template_dir()
            .join(format!("{}.tex", paths::FALLBACK_TEMPLATE));
        if fallback.is_file() {
            log::warn!(
                "template '{}' not found, using '{}'",
                requested.display(),
                fallback.display()
            );
            return Ok(fallback);
        }

        Err(TexcvError::TemplateNotFound(requested))
    }

    /// Files next to the template that the compiler needs (classes, styles, fonts)
    ///
    /// Every regular file in the template directory except `.tex` templates.
    pub fn support_files(&self) -> Result<Vec<PathBuf>> {
        let dir = self.template_dir();
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_none_or(|ext| ext != "tex") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Languages with a `data/cv-<lang>.json` file, sorted
    pub fn available_languages(&self) -> Result<Vec<String>> {
        let dir = self.data_dir();
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut languages = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(language) = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .and_then(|s| s.strip_prefix("cv-"))
                {
                    languages.push(language.to_string());
                }
            }
        }
        languages.sort();
        Ok(languages)
    }
}

/// Read a template file
pub fn read_template(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => TexcvError::TemplateNotFound(path.to_path_buf()),
        _ => TexcvError::IoError(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use texcv_testkit::temp_dir_in_workspace;

    #[test]
    fn test_paths() {
        let project = Project::new("/work/cv");
        assert_eq!(project.config_path(), Path::new("/work/cv/texcv.toml"));
        assert_eq!(project.data_path("it"), Path::new("/work/cv/data/cv-it.json"));
        assert_eq!(project.default_output_dir(), Path::new("/work/cv/output"));
    }

    #[test]
    fn test_validate_language_code() {
        assert!(validate_language_code("en").is_ok());
        assert!(validate_language_code("pt-BR").is_ok());
        assert!(validate_language_code("").is_err());
        assert!(validate_language_code("../en").is_err());
        assert!(validate_language_code("en it").is_err());
    }

    #[test]
    fn test_resolve_template_requested() {
        let temp = temp_dir_in_workspace();
        let project = Project::new(temp.path());
        fs::create_dir(project.template_dir()).unwrap();
        fs::write(project.template_dir().join("awesome-cv.tex"), "x").unwrap();

        let path = project.resolve_template("awesome-cv").unwrap();
        assert!(path.ends_with("template/awesome-cv.tex"));
    }

    #[test]
    fn test_resolve_template_fallback() {
        let temp = temp_dir_in_workspace();
        let project = Project::new(temp.path());
        fs::create_dir(project.template_dir()).unwrap();
        fs::write(project.template_dir().join("cv.tex"), "x").unwrap();

        let path = project.resolve_template("missing").unwrap();
        assert!(path.ends_with("template/cv.tex"));
    }

    #[test]
    fn test_resolve_template_not_found() {
        let temp = temp_dir_in_workspace();
        let project = Project::new(temp.path());

        let err = project.resolve_template("missing").unwrap_err();
        assert!(matches!(err, TexcvError::TemplateNotFound(_)));
    }

    #[test]
    fn test_support_files_exclude_templates() {
        let temp = temp_dir_in_workspace();
        let project = Project::new(temp.path());
        let dir = project.template_dir();
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("cv.tex"), "x").unwrap();
        fs::write(dir.join("awesome-cv.cls"), "x").unwrap();
        fs::write(dir.join("fontawesome.sty"), "x").unwrap();
        fs::create_dir(dir.join("fonts")).unwrap();

        let files = project.support_files().unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["awesome-cv.cls", "fontawesome.sty"]);
    }

    #[test]
    fn test_available_languages() {
        let temp = temp_dir_in_workspace();
        let project = Project::new(temp.path());
        fs::create_dir(project.data_dir()).unwrap();
        fs::write(project.data_path("it"), "{}").unwrap();
        fs::write(project.data_path("en"), "{}").unwrap();
        fs::write(project.data_dir().join("notes.txt"), "").unwrap();

        assert_eq!(project.available_languages().unwrap(), vec!["en", "it"]);
    }
}
