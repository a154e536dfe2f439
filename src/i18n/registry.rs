//! Language registry: Single source of truth for the languages constants carry.
//!
//! Entity payload text is written in the base language (Norwegian Bokmål).
//! Every other registered language owns one translation slot on a constant
//! entry. The registry is a `OnceLock` singleton, immutable after first access.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-2 language code (e.g., "eng", "nno", "nob")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Norwegian Nynorsk")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Nynorsk")
    pub native_name: &'static str,

    /// Whether entity payloads are authored in this language (only one should be true)
    pub is_base: bool,

    /// Short tags that normalize to this language (e.g., "en", "nb", "no")
    pub aliases: &'static [&'static str],
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its ISO 639-2 code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Find the language whose code or alias equals `tag` (already lowercased).
    pub fn get_by_alias(&self, tag: &str) -> Option<&LanguageConfig> {
        self.languages
            .iter()
            .find(|lang| lang.code == tag || lang.aliases.contains(&tag))
    }

    /// Get all languages.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the base language configuration.
    ///
    /// # Panics
    /// Panics if no base language is found or if multiple base languages are
    /// defined (this indicates a configuration error).
    pub fn base(&self) -> &LanguageConfig {
        let base_langs: Vec<_> = self.languages.iter().filter(|lang| lang.is_base).collect();

        match base_langs.len() {
            0 => panic!("No base language found in registry"),
            1 => base_langs[0],
            _ => panic!("Multiple base languages found in registry"),
        }
    }
}

/// Default language configurations.
///
/// English and Nynorsk are the two translation slots, in that order.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "nob",
            name: "Norwegian Bokmål",
            native_name: "Bokmål",
            is_base: true,
            aliases: &["nb", "no"],
        },
        LanguageConfig {
            code: "eng",
            name: "English",
            native_name: "English",
            is_base: false,
            aliases: &["en"],
        },
        LanguageConfig {
            code: "nno",
            name: "Norwegian Nynorsk",
            native_name: "Nynorsk",
            is_base: false,
            aliases: &["nn"],
        },
    ]
}
