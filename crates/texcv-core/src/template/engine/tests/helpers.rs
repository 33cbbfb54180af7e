//! Shared test helpers for template engine tests

use crate::section::SectionKey;
use crate::template::engine::TemplateContext;
use crate::template::placeholder::Placeholder;

/// Context with identity fields and one section
pub(super) fn simple_context() -> TemplateContext {
    let mut context = TemplateContext::new();
    context.insert(Placeholder::Name, "Ada Lovelace");
    context.insert(Placeholder::Email, "ada@example.com");
    context.insert(Placeholder::Color, "skyblue");
    context.insert(
        Placeholder::Section(SectionKey::Summary),
        "\\cvsection{Summary}\n",
    );
    context.insert(Placeholder::Label(SectionKey::Summary), "Summary");
    context
}
