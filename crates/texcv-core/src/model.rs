//! Résumé data model (JSON Resume layout)
//!
//! Every field is optional at the parsing level. Presence of the identity
//! fields is checked by the renderer, not here.

use crate::error::{Result, TexcvError};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Resume {
    #[serde(deserialize_with = "null_as_default")]
    pub basics: Basics,
    #[serde(deserialize_with = "null_as_default")]
    pub work: Vec<WorkItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub volunteer: Vec<VolunteerItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<EducationItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub awards: Vec<Award>,
    #[serde(deserialize_with = "null_as_default")]
    pub certificates: Vec<Certificate>,
    #[serde(deserialize_with = "null_as_default")]
    pub publications: Vec<Publication>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<SkillGroup>,
    #[serde(deserialize_with = "null_as_default")]
    pub languages: Vec<LanguageProficiency>,
    #[serde(deserialize_with = "null_as_default")]
    pub references: Vec<Reference>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<ProjectItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub meta: Meta,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Basics {
    pub name: Option<String>,
    /// Job title shown under the name
    pub label: Option<String>,
    pub image: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Personal homepage
    pub url: Option<String>,
    pub summary: Option<String>,
    pub location: Option<Location>,
    #[serde(deserialize_with = "null_as_default")]
    pub profiles: Vec<Profile>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Location {
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub country_code: Option<String>,
    pub region: Option<String>,
}

impl Location {
    /// Non-empty parts joined as "address, postal code city, region, country"
    pub fn one_line(&self) -> String {
        let city = [self.postal_code.as_deref(), self.city.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        [
            self.address.as_deref().unwrap_or_default(),
            city.as_str(),
            self.region.as_deref().unwrap_or_default(),
            self.country_code.as_deref().unwrap_or_default(),
        ]
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub network: Option<String>,
    pub username: Option<String>,
    pub url: Option<String>,
}

impl Profile {
    /// Username, or the last path segment of the profile URL
    pub fn handle(&self) -> Option<String> {
        if let Some(username) = non_blank(&self.username) {
            return Some(username.to_string());
        }

        let url = non_blank(&self.url)?;
        url.trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty() && !segment.contains(':'))
            .map(str::to_string)
    }

    fn is_network(&self, network: &str) -> bool {
        self.network
            .as_deref()
            .is_some_and(|n| n.trim().eq_ignore_ascii_case(network))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkItem {
    #[serde(alias = "company")]
    pub name: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub url: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub summary: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub highlights: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct VolunteerItem {
    pub organization: Option<String>,
    pub position: Option<String>,
    pub url: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub summary: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationItem {
    pub institution: Option<String>,
    pub url: Option<String>,
    pub area: Option<String>,
    pub study_type: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub score: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Award {
    pub title: Option<String>,
    pub date: Option<String>,
    pub awarder: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Certificate {
    pub name: Option<String>,
    pub date: Option<String>,
    pub issuer: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Publication {
    pub name: Option<String>,
    pub publisher: Option<String>,
    pub release_date: Option<String>,
    pub url: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillGroup {
    pub name: Option<String>,
    pub level: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LanguageProficiency {
    pub language: Option<String>,
    pub fluency: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Reference {
    pub name: Option<String>,
    pub reference: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectItem {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub highlights: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub roles: Vec<String>,
    pub entity: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Meta {
    pub canonical: Option<String>,
    pub version: Option<String>,
    pub last_modified: Option<String>,
}

impl Resume {
    /// Parse a résumé data file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(TexcvError::DataNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| TexcvError::ResumeParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// First profile on the given network (case-insensitive)
    pub fn profile(&self, network: &str) -> Option<&Profile> {
        self.basics.profiles.iter().find(|p| p.is_network(network))
    }
}

/// Treat an explicit `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Trimmed value when present and not blank
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
