//! Language type: validated ISO 639-2 language representation.

use crate::error::CatalogError;
use crate::i18n::{LanguageConfig, LanguageRegistry};
use serde::{Serialize, Serializer};
use std::fmt;

/// A language known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    code: &'static str,
}

impl Language {
    /// English translation slot.
    pub const ENGLISH: Language = Language { code: "eng" };

    /// Norwegian Nynorsk translation slot.
    pub const NYNORSK: Language = Language { code: "nno" };

    /// Norwegian Bokmål, the language entity payloads are written in.
    pub const BOKMAL: Language = Language { code: "nob" };

    /// Create a Language from an exact ISO 639-2 code.
    pub fn from_code(code: &str) -> Result<Language, CatalogError> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(Language { code: config.code }),
            None => Err(CatalogError::UnknownLanguage(code.to_string())),
        }
    }

    /// Normalize a loose language tag ("en-US", "nb", "NNO") to a registered language.
    ///
    /// A blank tag means the base language. Unsupported tags yield `None` so the
    /// caller can pick its own fallback.
    pub fn normalize(tag: &str) -> Option<Language> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Some(Self::base());
        }

        let primary = tag.split('-').next().unwrap_or(tag).to_lowercase();
        LanguageRegistry::get()
            .get_by_alias(&primary)
            .map(|config| Language { code: config.code })
    }

    /// The base language entity payloads are authored in.
    pub fn base() -> Language {
        Language {
            code: LanguageRegistry::get().base().code,
        }
    }

    /// Get the ISO 639-2 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not registered, which cannot happen for a
    /// `Language` built through its constants or constructors.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Whether payload text is already in this language (no translation needed).
    pub fn is_base(&self) -> bool {
        self.config().is_base
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Language {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_slot_constants() {
        assert_eq!(Language::ENGLISH.code(), "eng");
        assert_eq!(Language::NYNORSK.code(), "nno");
        assert_eq!(Language::BOKMAL.code(), "nob");
        assert!(Language::BOKMAL.is_base());
        assert!(!Language::ENGLISH.is_base());
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_valid() {
        let language = Language::from_code("nno").expect("Should succeed");
        assert_eq!(language, Language::NYNORSK);
        assert_eq!(language.name(), "Norwegian Nynorsk");
    }

    #[test]
    fn test_from_code_rejects_short_tag() {
        let result = Language::from_code("en");
        assert_eq!(result, Err(CatalogError::UnknownLanguage("en".to_string())));
    }

    // ==================== normalize Tests ====================

    #[test]
    fn test_normalize_regional_tags() {
        assert_eq!(Language::normalize("en-US"), Some(Language::ENGLISH));
        assert_eq!(Language::normalize("en-GB"), Some(Language::ENGLISH));
        assert_eq!(Language::normalize("nb-NO"), Some(Language::BOKMAL));
        assert_eq!(Language::normalize("nn-NO"), Some(Language::NYNORSK));
    }

    #[test]
    fn test_normalize_codes_and_case() {
        assert_eq!(Language::normalize("ENG"), Some(Language::ENGLISH));
        assert_eq!(Language::normalize("no"), Some(Language::BOKMAL));
        assert_eq!(Language::normalize("nno"), Some(Language::NYNORSK));
    }

    #[test]
    fn test_normalize_blank_is_base() {
        assert_eq!(Language::normalize(""), Some(Language::BOKMAL));
        assert_eq!(Language::normalize("   "), Some(Language::BOKMAL));
    }

    #[test]
    fn test_normalize_unsupported() {
        assert_eq!(Language::normalize("sv-SE"), None);
        assert_eq!(Language::normalize("de"), None);
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_display_and_serialize() {
        assert_eq!(Language::ENGLISH.to_string(), "eng");
        let json = serde_json::to_string(&Language::NYNORSK).expect("Should serialize");
        assert_eq!(json, "\"nno\"");
    }
}
