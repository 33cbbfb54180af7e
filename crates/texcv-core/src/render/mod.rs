//! Renderer: résumé data + configuration + labels → filled LaTeX document
//!
//! Sections are emitted in configured order. Hidden sections and sections
//! with no data resolve both their body and `LABEL_` placeholders to the
//! empty string.

mod latex;
mod sections;

use crate::config::Config;
use crate::error::{Result, TexcvError};
use crate::escape::{escape, escape_url};
use crate::labels::{LabelTable, Labels};
use crate::model::{non_blank, Resume};
use crate::project::document_stem;
use crate::section::SectionKey;
use crate::template::{Placeholder, TemplateContext, TemplateEngine};
use latex::href;
use sections::SectionWriter;

/// Separator macro between items of the `CONTACTS` line
const CONTACT_SEPARATOR: &str = " \\cvsep{} ";

/// A filled template, ready to be written and compiled
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    pub language: String,
    pub source: String,
}

impl RenderedDocument {
    /// `cv-<lang>`, shared by the `.tex`, `.log` and `.pdf` outputs
    pub fn file_stem(&self) -> String {
        document_stem(&self.language)
    }
}

pub struct Renderer<'a> {
    config: &'a Config,
    labels: &'a Labels,
    language: String,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a Config, table: &'a LabelTable, language: &str) -> Self {
        Self {
            config,
            labels: table.for_language(language),
            language: language.to_string(),
        }
    }

    pub fn render(&self, resume: &Resume, template: &str) -> Result<RenderedDocument> {
        check_identity(resume)?;

        let order = self.section_order()?;
        let hidden = self.hidden_sections()?;

        let writer = SectionWriter {
            config: self.config,
            labels: self.labels,
        };

        let mut context = self.header_context(resume);
        let mut body = String::new();

        for section in order {
            if hidden.contains(&section) {
                log::debug!("section '{}' is hidden", section);
                continue;
            }
            if !SectionWriter::has_content(resume, section) {
                log::debug!("section '{}' has no data", section);
                continue;
            }

            let fragment = writer.fragment(resume, section)?;
            body.push_str(&fragment);
            context.insert(Placeholder::Section(section), fragment);
            context.insert(
                Placeholder::Label(section),
                escape(self.labels.get(section.key())?),
            );
        }
        context.insert(Placeholder::Sections, body);

        let source = TemplateEngine::new().render(template, &context);
        Ok(RenderedDocument {
            language: self.language.clone(),
            source,
        })
    }

    /// `sections.order` parsed, duplicates dropped after the first occurrence
    fn section_order(&self) -> Result<Vec<SectionKey>> {
        let mut order = Vec::new();
        for name in &self.config.sections.order {
            let section: SectionKey = name.parse()?;
            if order.contains(&section) {
                log::warn!("section '{}' listed more than once, keeping the first", name);
                continue;
            }
            order.push(section);
        }
        Ok(order)
    }

    fn hidden_sections(&self) -> Result<Vec<SectionKey>> {
        self.config
            .sections
            .hidden
            .iter()
            .map(|name| name.parse())
            .collect()
    }

    fn header_context(&self, resume: &Resume) -> TemplateContext {
        let basics = &resume.basics;
        let mut context = TemplateContext::new();

        let address = basics
            .location
            .as_ref()
            .map(|l| escape(&l.one_line()))
            .unwrap_or_default();
        let github = resume.profile("github").and_then(|p| p.handle());
        let linkedin = resume.profile("linkedin").and_then(|p| p.handle());

        context.insert(Placeholder::Name, escape_field(&basics.name));
        context.insert(Placeholder::Title, escape_field(&basics.label));
        context.insert(Placeholder::Address, address.clone());
        context.insert(Placeholder::Phone, escape_field(&basics.phone));
        context.insert(Placeholder::Email, escape_field(&basics.email));
        context.insert(
            Placeholder::Github,
            github.as_deref().map(escape).unwrap_or_default(),
        );
        context.insert(
            Placeholder::Linkedin,
            linkedin.as_deref().map(escape).unwrap_or_default(),
        );
        context.insert(
            Placeholder::Homepage,
            non_blank(&basics.url).map(escape_url).unwrap_or_default(),
        );

        let mut contacts = Vec::new();
        if !address.is_empty() {
            contacts.push(address);
        }
        if let Some(phone) = non_blank(&basics.phone) {
            contacts.push(escape(phone));
        }
        if let Some(email) = non_blank(&basics.email) {
            contacts.push(href(
                &format!("mailto:{}", escape_url(email)),
                &escape(email),
            ));
        }
        if let Some(url) = non_blank(&basics.url) {
            contacts.push(href(&escape_url(url), &escape(url)));
        }
        if let Some(handle) = &github {
            contacts.push(href(
                &format!("https://github.com/{}", escape_url(handle)),
                &escape(handle),
            ));
        }
        if let Some(handle) = &linkedin {
            contacts.push(href(
                &format!("https://www.linkedin.com/in/{}", escape_url(handle)),
                &escape(handle),
            ));
        }
        context.insert(Placeholder::Contacts, contacts.join(CONTACT_SEPARATOR));

        let margins = &self.config.margins;
        context.insert(Placeholder::Color, self.config.color.as_str());
        context.insert(Placeholder::FontSize, self.config.font_size.to_string());
        context.insert(Placeholder::MarginTop, margins.top.to_string());
        context.insert(Placeholder::MarginBottom, margins.bottom.to_string());
        context.insert(Placeholder::MarginLeft, margins.left.to_string());
        context.insert(Placeholder::MarginRight, margins.right.to_string());
        context.insert(Placeholder::Lang, escape(&self.language));

        context
    }
}

fn escape_field(value: &Option<String>) -> String {
    non_blank(value).map(escape).unwrap_or_default()
}

fn check_identity(resume: &Resume) -> Result<()> {
    if non_blank(&resume.basics.name).is_none() {
        return Err(TexcvError::MissingIdentity("name".to_string()));
    }
    if non_blank(&resume.basics.email).is_none() {
        return Err(TexcvError::MissingIdentity("email".to_string()));
    }
    Ok(())
}

/// Render `template` for `resume` in `language`
pub fn render(
    resume: &Resume,
    config: &Config,
    table: &LabelTable,
    language: &str,
    template: &str,
) -> Result<RenderedDocument> {
    Renderer::new(config, table, language).render(resume, template)
}
