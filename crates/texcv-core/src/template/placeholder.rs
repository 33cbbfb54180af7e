//! The closed set of placeholder names a template may use

use crate::section::SectionKey;
use std::fmt;

const LABEL_PREFIX: &str = "LABEL_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Placeholder {
    Name,
    Title,
    Address,
    Phone,
    Email,
    Linkedin,
    Github,
    Homepage,
    /// Pre-composed line of all non-empty contact details
    Contacts,
    Color,
    FontSize,
    MarginTop,
    MarginBottom,
    MarginLeft,
    MarginRight,
    /// Language code of the run
    Lang,
    /// Every visible section, in configured order
    Sections,
    Section(SectionKey),
    Label(SectionKey),
}

impl Placeholder {
    /// Resolve a token name such as `NAME` or `LABEL_SKILLS`
    pub fn from_name(name: &str) -> Option<Self> {
        let placeholder = match name {
            "NAME" => Placeholder::Name,
            "TITLE" => Placeholder::Title,
            "ADDRESS" => Placeholder::Address,
            "PHONE" => Placeholder::Phone,
            "EMAIL" => Placeholder::Email,
            "LINKEDIN" => Placeholder::Linkedin,
            "GITHUB" => Placeholder::Github,
            "HOMEPAGE" => Placeholder::Homepage,
            "CONTACTS" => Placeholder::Contacts,
            "COLOR" => Placeholder::Color,
            "FONT_SIZE" => Placeholder::FontSize,
            "MARGIN_TOP" => Placeholder::MarginTop,
            "MARGIN_BOTTOM" => Placeholder::MarginBottom,
            "MARGIN_LEFT" => Placeholder::MarginLeft,
            "MARGIN_RIGHT" => Placeholder::MarginRight,
            "LANG" => Placeholder::Lang,
            "SECTIONS" => Placeholder::Sections,
            other => {
                return match other.strip_prefix(LABEL_PREFIX) {
                    Some(section) => SectionKey::from_token(section).map(Placeholder::Label),
                    None => SectionKey::from_token(other).map(Placeholder::Section),
                };
            }
        };
        Some(placeholder)
    }

    /// Token name without braces
    pub fn name(&self) -> String {
        match self {
            Placeholder::Name => "NAME".to_string(),
            Placeholder::Title => "TITLE".to_string(),
            Placeholder::Address => "ADDRESS".to_string(),
            Placeholder::Phone => "PHONE".to_string(),
            Placeholder::Email => "EMAIL".to_string(),
            Placeholder::Linkedin => "LINKEDIN".to_string(),
            Placeholder::Github => "GITHUB".to_string(),
            Placeholder::Homepage => "HOMEPAGE".to_string(),
            Placeholder::Contacts => "CONTACTS".to_string(),
            Placeholder::Color => "COLOR".to_string(),
            Placeholder::FontSize => "FONT_SIZE".to_string(),
            Placeholder::MarginTop => "MARGIN_TOP".to_string(),
            Placeholder::MarginBottom => "MARGIN_BOTTOM".to_string(),
            Placeholder::MarginLeft => "MARGIN_LEFT".to_string(),
            Placeholder::MarginRight => "MARGIN_RIGHT".to_string(),
            Placeholder::Lang => "LANG".to_string(),
            Placeholder::Sections => "SECTIONS".to_string(),
            Placeholder::Section(section) => section.token().to_string(),
            Placeholder::Label(section) => format!("{}{}", LABEL_PREFIX, section.token()),
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{{{}}}}}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_fixed_tokens() {
        assert_eq!(Placeholder::from_name("NAME"), Some(Placeholder::Name));
        assert_eq!(Placeholder::from_name("FONT_SIZE"), Some(Placeholder::FontSize));
        assert_eq!(Placeholder::from_name("name"), None);
        assert_eq!(Placeholder::from_name("UNKNOWN"), None);
    }

    #[test]
    fn test_from_name_section_tokens() {
        assert_eq!(
            Placeholder::from_name("EXPERIENCE"),
            Some(Placeholder::Section(SectionKey::Experience))
        );
        assert_eq!(
            Placeholder::from_name("LABEL_EXPERIENCE"),
            Some(Placeholder::Label(SectionKey::Experience))
        );
        assert_eq!(Placeholder::from_name("LABEL_"), None);
        assert_eq!(Placeholder::from_name("LABEL_HOBBIES"), None);
    }

    #[test]
    fn test_display_includes_braces() {
        assert_eq!(Placeholder::Name.to_string(), "{{NAME}}");
        assert_eq!(
            Placeholder::Label(SectionKey::Skills).to_string(),
            "{{LABEL_SKILLS}}"
        );
    }

    #[test]
    fn test_name_round_trip() {
        for section in SectionKey::ALL {
            for placeholder in [Placeholder::Section(section), Placeholder::Label(section)] {
                assert_eq!(Placeholder::from_name(&placeholder.name()), Some(placeholder));
            }
        }
    }
}
