//! Per-language section headings and UI strings
//!
//! The table is built once at startup and passed by reference. Lookups for an
//! unknown language fall back to English; lookups for an unknown key are a
//! configuration error.

mod catalog;

pub use catalog::LABEL_KEYS;

use crate::config::consts::DEFAULT_LANGUAGE;
use crate::error::{Result, TexcvError};
use std::collections::BTreeMap;

/// Labels for one language
#[derive(Debug, Clone, PartialEq)]
pub struct Labels {
    language: String,
    entries: BTreeMap<String, String>,
    months: Vec<String>,
}

impl Labels {
    fn from_static(language: &str, entries: &[(&str, &str)], months: &[&str; 12]) -> Self {
        Self {
            language: language.to_string(),
            entries: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            months: months.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// Language code these labels belong to
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Look up a label; an unknown key is fatal
    pub fn get(&self, key: &str) -> Result<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| TexcvError::LabelNotFound {
                language: self.language.clone(),
                key: key.to_string(),
            })
    }

    /// Abbreviated month name, 1-based
    pub fn month(&self, month: u32) -> &str {
        month
            .checked_sub(1)
            .and_then(|i| self.months.get(i as usize))
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Word used for an open-ended date range
    pub fn present(&self) -> &str {
        self.entries
            .get("present")
            .map(String::as_str)
            .unwrap_or("Present")
    }
}

/// Language code → labels
#[derive(Debug, Clone)]
pub struct LabelTable {
    tables: BTreeMap<String, Labels>,
}

impl LabelTable {
    /// English and Italian tables
    pub fn builtin() -> Self {
        let tables = catalog::BUILTIN
            .iter()
            .map(|(code, entries, months)| {
                (code.to_string(), Labels::from_static(code, entries, months))
            })
            .collect();
        Self { tables }
    }

    /// Merge `[labels.<lang>]` overrides from the configuration
    ///
    /// A language without a built-in table starts as a copy of English.
    pub fn with_overrides(
        mut self,
        overrides: &BTreeMap<String, BTreeMap<String, String>>,
    ) -> Result<Self> {
        for (language, entries) in overrides {
            let base = self.default_labels().clone();
            let labels = self
                .tables
                .entry(language.clone())
                .or_insert_with(|| Labels {
                    language: language.clone(),
                    ..base
                });

            for (key, value) in entries {
                if !LABEL_KEYS.contains(&key.as_str()) {
                    return Err(TexcvError::LabelNotFound {
                        language: language.clone(),
                        key: key.clone(),
                    });
                }
                labels.entries.insert(key.clone(), value.clone());
            }
        }
        Ok(self)
    }

    /// Labels for `language`, or English when the language is unknown
    pub fn for_language(&self, language: &str) -> &Labels {
        match self.tables.get(language) {
            Some(labels) => labels,
            None => {
                log::warn!(
                    "no labels for language '{}', falling back to '{}'",
                    language,
                    DEFAULT_LANGUAGE
                );
                self.default_labels()
            }
        }
    }

    /// Whether a dedicated table exists for `language`
    pub fn has_language(&self, language: &str) -> bool {
        self.tables.contains_key(language)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    fn default_labels(&self) -> &Labels {
        // builtin() always registers the default language and nothing removes it
        &self.tables[DEFAULT_LANGUAGE]
    }
}

impl Default for LabelTable {
    fn default() -> Self {
        Self::builtin()
    }
}
