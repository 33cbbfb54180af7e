//! Project fixtures: data files, configuration and templates

use std::fs;
use std::path::{Path, PathBuf};

/// Smallest data file the renderer accepts
pub const MINIMAL_RESUME: &str = r#"{
  "basics": { "name": "Ada Lovelace", "email": "ada@example.com" }
}"#;

/// Data file exercising most sections and the characters LaTeX reserves
pub const SAMPLE_RESUME: &str = r#"{
  "basics": {
    "name": "Ada Lovelace",
    "label": "Analyst & Programmer",
    "email": "ada@example.com",
    "phone": "+44 20 7946 0000",
    "url": "https://ada.example.com",
    "summary": "Wrote the first algorithm intended for a machine; 100% curious.",
    "location": { "city": "London", "countryCode": "UK" },
    "profiles": [
      { "network": "GitHub", "url": "https://github.com/ada/" },
      { "network": "LinkedIn", "username": "ada-lovelace" }
    ]
  },
  "work": [
    {
      "name": "Analytical Engines Ltd",
      "position": "Analyst",
      "location": "London",
      "startDate": "2020-01",
      "highlights": ["Published notes on the engine", "Designed loops_and_jumps"],
      "keywords": ["Rust", "C#"]
    }
  ],
  "education": [
    {
      "institution": "University of London",
      "studyType": "BSc",
      "area": "Mathematics",
      "startDate": "2014-09",
      "endDate": "2017-06",
      "score": "First"
    }
  ],
  "skills": [
    { "name": "Languages", "keywords": ["Rust", "LaTeX"] }
  ],
  "languages": [
    { "language": "English", "fluency": "Native" }
  ]
}"#;

/// Template using every kind of placeholder
pub const SAMPLE_TEMPLATE: &str = r"\documentclass[{{FONT_SIZE}}pt]{article}
% color: {{COLOR}}
\begin{document}
\name{{{NAME}}}
\position{{{TITLE}}}
\contacts{{{CONTACTS}}}
{{SECTIONS}}
\end{document}
";

pub const SAMPLE_CONFIG: &str = r#"template = "cv"
color = "emerald"
font_size = 11

[sections]
order = ["summary", "experience", "education", "skills", "languages"]
"#;

/// Write `data/cv-<language>.json`
pub fn write_resume(root: &Path, language: &str, json: &str) -> PathBuf {
    let dir = root.join("data");
    fs::create_dir_all(&dir).expect("Failed to create data directory");
    let path = dir.join(format!("cv-{}.json", language));
    fs::write(&path, json).expect("Failed to write data file");
    path
}

/// Write `template/<name>.tex`
pub fn write_template(root: &Path, name: &str, content: &str) -> PathBuf {
    let dir = root.join("template");
    fs::create_dir_all(&dir).expect("Failed to create template directory");
    let path = dir.join(format!("{}.tex", name));
    fs::write(&path, content).expect("Failed to write template");
    path
}

/// Write `texcv.toml`
pub fn write_config(root: &Path, toml: &str) -> PathBuf {
    let path = root.join("texcv.toml");
    fs::write(&path, toml).expect("Failed to write texcv.toml");
    path
}

/// A complete English project: configuration, data file and `template/cv.tex`
pub fn write_sample_project(root: &Path) {
    write_config(root, SAMPLE_CONFIG);
    write_resume(root, "en", SAMPLE_RESUME);
    write_template(root, "cv", SAMPLE_TEMPLATE);
}
