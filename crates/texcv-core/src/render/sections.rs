//! Markup fragments for each résumé section
//!
//! Every user-supplied value goes through the formatter first and the
//! escaper last, exactly once.

use super::latex::{environment, href, item_list, macro_call, section_heading};
use crate::config::Config;
use crate::error::Result;
use crate::escape::{escape, escape_url};
use crate::format::{format_date, format_date_range, truncate_list};
use crate::labels::Labels;
use crate::model::{
    non_blank, Award, Certificate, EducationItem, LanguageProficiency, ProjectItem, Publication,
    Reference, Resume, SkillGroup, VolunteerItem, WorkItem,
};
use crate::section::SectionKey;
use std::fmt::Write;

/// Escaped field value, empty when absent
fn field(value: &Option<String>) -> String {
    non_blank(value).map(escape).unwrap_or_default()
}

fn escape_all<'a>(items: impl IntoIterator<Item = &'a String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(escape)
        .collect()
}

/// A group with no name and nothing to show next to it
fn skill_is_blank(group: &SkillGroup) -> bool {
    non_blank(&group.name).is_none()
        && non_blank(&group.level).is_none()
        && group.keywords.iter().all(|k| k.trim().is_empty())
}

/// Shared state for building fragments
pub(super) struct SectionWriter<'a> {
    pub config: &'a Config,
    pub labels: &'a Labels,
}

impl SectionWriter<'_> {
    /// Whether the résumé has any content for `section`
    pub fn has_content(resume: &Resume, section: SectionKey) -> bool {
        match section {
            SectionKey::Summary => non_blank(&resume.basics.summary).is_some(),
            SectionKey::Experience => !resume.work.is_empty(),
            SectionKey::Education => !resume.education.is_empty(),
            SectionKey::Skills => resume.skills.iter().any(|group| !skill_is_blank(group)),
            SectionKey::Languages => resume
                .languages
                .iter()
                .any(|l| non_blank(&l.language).is_some()),
            SectionKey::Projects => !resume.projects.is_empty(),
            SectionKey::Volunteer => !resume.volunteer.is_empty(),
            SectionKey::Awards => !resume.awards.is_empty(),
            SectionKey::Certificates => !resume.certificates.is_empty(),
            SectionKey::Publications => !resume.publications.is_empty(),
            SectionKey::References => !resume.references.is_empty(),
        }
    }

    /// Heading plus body for one section
    pub fn fragment(&self, resume: &Resume, section: SectionKey) -> Result<String> {
        let heading = escape(self.labels.get(section.key())?);

        let body = match section {
            SectionKey::Summary => self.summary(&resume.basics.summary),
            SectionKey::Experience => self.experience(&resume.work)?,
            SectionKey::Education => self.education(&resume.education)?,
            SectionKey::Skills => self.skills(&resume.skills),
            SectionKey::Languages => self.languages(&resume.languages),
            SectionKey::Projects => self.projects(&resume.projects)?,
            SectionKey::Volunteer => self.volunteer(&resume.volunteer),
            SectionKey::Awards => self.awards(&resume.awards),
            SectionKey::Certificates => self.certificates(&resume.certificates),
            SectionKey::Publications => self.publications(&resume.publications),
            SectionKey::References => self.references(&resume.references),
        };

        let mut out = String::new();
        section_heading(&mut out, &heading);
        out.push_str(&body);
        out.push('\n');
        Ok(out)
    }

    fn date_range(&self, start: &Option<String>, end: &Option<String>) -> String {
        escape(&format_date_range(
            start.as_deref(),
            end.as_deref(),
            self.labels,
        ))
    }

    fn date(&self, date: &Option<String>) -> String {
        escape(&format_date(date.as_deref(), self.labels))
    }

    /// `\cvtech{<label>}{a, b}`; empty when there are no items
    fn labelled_list(&self, label_key: &str, items: &[String]) -> Result<String> {
        let items = escape_all(items);
        if items.is_empty() {
            return Ok(String::new());
        }
        let label = escape(self.labels.get(label_key)?);
        Ok(format!("\\cvtech{{{}}}{{{}}}\n", label, items.join(", ")))
    }

    fn technologies(&self, keywords: &[String]) -> Result<String> {
        if !self.config.show_technologies {
            return Ok(String::new());
        }
        self.labelled_list("technologies", keywords)
    }

    fn summary(&self, summary: &Option<String>) -> String {
        let mut out = String::new();
        environment(&mut out, "cvparagraph", &format!("{}\n", field(summary)));
        out
    }

    fn experience(&self, items: &[WorkItem]) -> Result<String> {
        let mut entries = String::new();
        for item in items {
            let highlights = truncate_list(&item.highlights, self.config.max_highlights_per_job);

            let mut body = String::new();
            if let Some(summary) = non_blank(&item.summary) {
                let _ = writeln!(body, "{}", escape(summary));
            }
            body.push_str(&item_list(&escape_all(highlights)));
            body.push_str(&self.technologies(&item.keywords)?);

            macro_call(
                &mut entries,
                "cventry",
                &[
                    &field(&item.position),
                    &field(&item.name),
                    &field(&item.location),
                    &self.date_range(&item.start_date, &item.end_date),
                    &body,
                ],
            );
        }

        let mut out = String::new();
        environment(&mut out, "cventries", &entries);
        Ok(out)
    }

    fn education(&self, items: &[EducationItem]) -> Result<String> {
        let mut entries = String::new();
        for item in items {
            let degree = [non_blank(&item.study_type), non_blank(&item.area)]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(", ");

            let mut body = String::new();
            if let Some(score) = non_blank(&item.score) {
                let label = self.labels.get("score")?;
                let _ = writeln!(body, "{}: {}", escape(label), escape(score));
            }
            body.push_str(&self.labelled_list("courses", &item.courses)?);

            macro_call(
                &mut entries,
                "cventry",
                &[
                    &escape(&degree),
                    &field(&item.institution),
                    &field(&item.location),
                    &self.date_range(&item.start_date, &item.end_date),
                    &body,
                ],
            );
        }

        let mut out = String::new();
        environment(&mut out, "cventries", &entries);
        Ok(out)
    }

    fn skills(&self, groups: &[SkillGroup]) -> String {
        let mut entries = String::new();
        for group in groups {
            if skill_is_blank(group) {
                continue;
            }
            let keywords = escape_all(&group.keywords);
            let value = if keywords.is_empty() {
                field(&group.level)
            } else {
                keywords.join(" \\textbar{} ")
            };
            let name = field(&group.name);
            macro_call(&mut entries, "cvskill", &[&name, &value]);
        }

        let mut out = String::new();
        environment(&mut out, "cvskills", &entries);
        out
    }

    fn languages(&self, languages: &[LanguageProficiency]) -> String {
        let mut entries = String::new();
        for language in languages {
            let name = field(&language.language);
            if name.is_empty() {
                continue;
            }
            macro_call(&mut entries, "cvskill", &[&name, &field(&language.fluency)]);
        }

        let mut out = String::new();
        environment(&mut out, "cvskills", &entries);
        out
    }

    fn projects(&self, items: &[ProjectItem]) -> Result<String> {
        let mut entries = String::new();
        for item in items {
            let mut body = String::new();
            if let Some(description) = non_blank(&item.description) {
                let _ = writeln!(body, "{}", escape(description));
            }
            body.push_str(&item_list(&escape_all(&item.highlights)));
            body.push_str(&self.technologies(&item.keywords)?);

            let name = match non_blank(&item.url) {
                Some(url) => href(&escape_url(url), &field(&item.name)),
                None => field(&item.name),
            };

            macro_call(
                &mut entries,
                "cventry",
                &[
                    &name,
                    &escape_all(&item.roles).join(", "),
                    &field(&item.entity),
                    &self.date_range(&item.start_date, &item.end_date),
                    &body,
                ],
            );
        }

        let mut out = String::new();
        environment(&mut out, "cventries", &entries);
        Ok(out)
    }

    fn volunteer(&self, items: &[VolunteerItem]) -> String {
        let mut entries = String::new();
        for item in items {
            let mut body = String::new();
            if let Some(summary) = non_blank(&item.summary) {
                let _ = writeln!(body, "{}", escape(summary));
            }
            body.push_str(&item_list(&escape_all(&item.highlights)));

            macro_call(
                &mut entries,
                "cventry",
                &[
                    &field(&item.position),
                    &field(&item.organization),
                    "",
                    &self.date_range(&item.start_date, &item.end_date),
                    &body,
                ],
            );
        }

        let mut out = String::new();
        environment(&mut out, "cventries", &entries);
        out
    }

    fn awards(&self, awards: &[Award]) -> String {
        let mut entries = String::new();
        for award in awards {
            macro_call(
                &mut entries,
                "cvhonor",
                &[
                    &field(&award.title),
                    &field(&award.awarder),
                    &field(&award.summary),
                    &self.date(&award.date),
                ],
            );
        }

        let mut out = String::new();
        environment(&mut out, "cvhonors", &entries);
        out
    }

    fn certificates(&self, certificates: &[Certificate]) -> String {
        let mut entries = String::new();
        for certificate in certificates {
            let name = match non_blank(&certificate.url) {
                Some(url) => href(&escape_url(url), &field(&certificate.name)),
                None => field(&certificate.name),
            };
            macro_call(
                &mut entries,
                "cvhonor",
                &[
                    &name,
                    &field(&certificate.issuer),
                    "",
                    &self.date(&certificate.date),
                ],
            );
        }

        let mut out = String::new();
        environment(&mut out, "cvhonors", &entries);
        out
    }

    fn publications(&self, publications: &[Publication]) -> String {
        let mut entries = String::new();
        for publication in publications {
            let mut body = String::new();
            if let Some(summary) = non_blank(&publication.summary) {
                let _ = writeln!(body, "{}", escape(summary));
            }
            let name = match non_blank(&publication.url) {
                Some(url) => href(&escape_url(url), &field(&publication.name)),
                None => field(&publication.name),
            };

            macro_call(
                &mut entries,
                "cventry",
                &[
                    &name,
                    &field(&publication.publisher),
                    "",
                    &self.date(&publication.release_date),
                    &body,
                ],
            );
        }

        let mut out = String::new();
        environment(&mut out, "cventries", &entries);
        out
    }

    fn references(&self, references: &[Reference]) -> String {
        let mut out = String::new();
        for reference in references {
            macro_call(
                &mut out,
                "cvreference",
                &[&field(&reference.name), &field(&reference.reference)],
            );
        }
        out
    }
}
