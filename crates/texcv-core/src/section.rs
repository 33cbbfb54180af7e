//! Résumé sections known to the renderer

use crate::error::{Result, TexcvError};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionKey {
    Summary,
    Experience,
    Education,
    Skills,
    Languages,
    Projects,
    Volunteer,
    Awards,
    Certificates,
    Publications,
    References,
}

impl SectionKey {
    pub const ALL: [SectionKey; 11] = [
        SectionKey::Summary,
        SectionKey::Experience,
        SectionKey::Education,
        SectionKey::Skills,
        SectionKey::Languages,
        SectionKey::Projects,
        SectionKey::Volunteer,
        SectionKey::Awards,
        SectionKey::Certificates,
        SectionKey::Publications,
        SectionKey::References,
    ];

    /// Name used in texcv.toml and as the label key
    pub fn key(&self) -> &'static str {
        match self {
            SectionKey::Summary => "summary",
            SectionKey::Experience => "experience",
            SectionKey::Education => "education",
            SectionKey::Skills => "skills",
            SectionKey::Languages => "languages",
            SectionKey::Projects => "projects",
            SectionKey::Volunteer => "volunteer",
            SectionKey::Awards => "awards",
            SectionKey::Certificates => "certificates",
            SectionKey::Publications => "publications",
            SectionKey::References => "references",
        }
    }

    /// Placeholder name of the section body, e.g. `EXPERIENCE`
    pub fn token(&self) -> &'static str {
        match self {
            SectionKey::Summary => "SUMMARY",
            SectionKey::Experience => "EXPERIENCE",
            SectionKey::Education => "EDUCATION",
            SectionKey::Skills => "SKILLS",
            SectionKey::Languages => "LANGUAGES",
            SectionKey::Projects => "PROJECTS",
            SectionKey::Volunteer => "VOLUNTEER",
            SectionKey::Awards => "AWARDS",
            SectionKey::Certificates => "CERTIFICATES",
            SectionKey::Publications => "PUBLICATIONS",
            SectionKey::References => "REFERENCES",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.token() == token)
    }
}

impl FromStr for SectionKey {
    type Err = TexcvError;

    fn from_str(s: &str) -> Result<Self> {
        // "work" is the JSON Resume name for the experience section
        let key = match s.trim() {
            "work" => "experience",
            other => other,
        };
        Self::ALL
            .into_iter()
            .find(|section| section.key() == key)
            .ok_or_else(|| TexcvError::UnknownSection(s.to_string()))
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
