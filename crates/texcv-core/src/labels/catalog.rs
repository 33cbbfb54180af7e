//! Built-in label strings
//!
//! Every language table defines the same keys; `LABEL_KEYS` is the list the
//! configuration may override.
//!
//! ## Adding a new language
//!
//! 1. Create a `const XX: &[(&str, &str)]` table and `XX_MONTHS` array below
//! 2. Register both in `BUILTIN`

/// Keys every language table defines
pub const LABEL_KEYS: &[&str] = &[
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
    "present",
    "technologies",
    "courses",
    "score",
];

const EN: &[(&str, &str)] = &[
    ("summary", "Summary"),
    ("experience", "Experience"),
    ("education", "Education"),
    ("skills", "Skills"),
    ("languages", "Languages"),
    ("projects", "Projects"),
    ("volunteer", "Volunteering"),
    ("awards", "Awards"),
    ("certificates", "Certificates"),
    ("publications", "Publications"),
    ("references", "References"),
    ("present", "Present"),
    ("technologies", "Technologies"),
    ("courses", "Courses"),
    ("score", "Grade"),
];

const EN_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const IT: &[(&str, &str)] = &[
    ("summary", "Profilo"),
    ("experience", "Esperienza"),
    ("education", "Istruzione"),
    ("skills", "Competenze"),
    ("languages", "Lingue"),
    ("projects", "Progetti"),
    ("volunteer", "Volontariato"),
    ("awards", "Riconoscimenti"),
    ("certificates", "Certificazioni"),
    ("publications", "Pubblicazioni"),
    ("references", "Referenze"),
    ("present", "Presente"),
    ("technologies", "Tecnologie"),
    ("courses", "Corsi"),
    ("score", "Voto"),
];

const IT_MONTHS: [&str; 12] = [
    "Gen", "Feb", "Mar", "Apr", "Mag", "Giu", "Lug", "Ago", "Set", "Ott", "Nov", "Dic",
];

/// (language code, labels, abbreviated months)
pub(super) const BUILTIN: &[(&str, &[(&str, &str)], [&str; 12])] =
    &[("en", EN, EN_MONTHS), ("it", IT, IT_MONTHS)];
