use std::fmt;
use unic_langid::{langid, LanguageIdentifier};

/// UI languages the app ships translations for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedLocale {
    En,
    Fr,
}

impl SupportedLocale {
    pub const ALL: [SupportedLocale; 2] = [SupportedLocale::En, SupportedLocale::Fr];

    pub const DEFAULT: SupportedLocale = SupportedLocale::En;

    pub fn code(&self) -> &'static str {
        match self {
            SupportedLocale::En => "en",
            SupportedLocale::Fr => "fr",
        }
    }

    /// Exact match against the two-letter code; anything else is unsupported
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    /// Maps a runtime language id back by its language subtag ("fr-CA" gives Fr)
    pub fn from_langid(id: &LanguageIdentifier) -> Option<Self> {
        Self::from_code(id.language.as_str())
    }

    pub fn langid(&self) -> LanguageIdentifier {
        match self {
            SupportedLocale::En => langid!("en"),
            SupportedLocale::Fr => langid!("fr"),
        }
    }

    /// Name of the language in that language, for the switcher
    pub fn native_name(&self) -> &'static str {
        match self {
            SupportedLocale::En => "English",
            SupportedLocale::Fr => "Français",
        }
    }
}

impl Default for SupportedLocale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for SupportedLocale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_accepts_supported() {
        assert_eq!(SupportedLocale::from_code("en"), Some(SupportedLocale::En));
        assert_eq!(SupportedLocale::from_code("fr"), Some(SupportedLocale::Fr));
    }

    #[test]
    fn test_from_code_rejects_everything_else() {
        for code in ["", "de", "EN", "fr-FR", " en", "english"] {
            assert_eq!(SupportedLocale::from_code(code), None, "{code:?}");
        }
    }

    #[test]
    fn test_langid_matches_code() {
        for locale in SupportedLocale::ALL {
            assert_eq!(locale.langid().to_string(), locale.code());
            assert_eq!(SupportedLocale::from_langid(&locale.langid()), Some(locale));
        }
    }

    #[test]
    fn test_from_langid_ignores_region() {
        assert_eq!(
            SupportedLocale::from_langid(&langid!("fr-CA")),
            Some(SupportedLocale::Fr)
        );
        assert_eq!(SupportedLocale::from_langid(&langid!("de-DE")), None);
    }
}
