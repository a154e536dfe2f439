//! Translation bundle validation.
//!
//! Checks that the bundles attached to a constant entry are well formed:
//! field names are PascalCase property names, no field repeats inside one
//! bundle, and both translation slots cover the same fields.

use crate::i18n::TranslationBundle;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about an entry's translations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Malformed bundles
    pub errors: Vec<String>,

    /// Suspicious but loadable bundles
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for the translation bundles of one constant entry.
pub struct TranslationValidator;

static FIELD_NAME_REGEX: OnceLock<Regex> = OnceLock::new();
static LANGUAGE_CODE_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate the English and Nynorsk bundles of an entry named `entry_name`.
    ///
    /// An entry without any bundle is valid; translations are optional.
    pub fn validate(
        entry_name: &str,
        english: Option<&TranslationBundle>,
        nynorsk: Option<&TranslationBundle>,
    ) -> ValidationReport {
        let mut report = ValidationReport::new();

        for bundle in english.iter().chain(nynorsk.iter()) {
            Self::check_bundle(entry_name, bundle, &mut report);
        }

        match (english, nynorsk) {
            (Some(en), Some(nn)) => {
                let en_fields = Self::field_set(en);
                let nn_fields = Self::field_set(nn);
                if en_fields != nn_fields {
                    report.warnings.push(format!(
                        "{}: field mismatch, eng has {:?}, nno has {:?}",
                        entry_name, en_fields, nn_fields
                    ));
                }
            }
            (Some(only), None) | (None, Some(only)) => {
                report.warnings.push(format!(
                    "{}: only {} translation present",
                    entry_name,
                    only.language()
                ));
            }
            (None, None) => {}
        }

        report
    }

    fn check_bundle(entry_name: &str, bundle: &TranslationBundle, report: &mut ValidationReport) {
        let code = bundle.language().code();
        if !Self::is_language_code(code) {
            report
                .errors
                .push(format!("{}: malformed language code '{}'", entry_name, code));
        }

        let mut seen = BTreeSet::new();
        for (field, value) in bundle.fields() {
            if !Self::is_field_name(field) {
                report.errors.push(format!(
                    "{}: invalid field name '{}' in {} bundle",
                    entry_name, field, code
                ));
            }
            if !seen.insert(field.as_str()) {
                report.errors.push(format!(
                    "{}: field '{}' repeated in {} bundle",
                    entry_name, field, code
                ));
            }
            if value.trim().is_empty() {
                report.warnings.push(format!(
                    "{}: blank value for '{}' in {} bundle",
                    entry_name, field, code
                ));
            }
        }
    }

    fn field_set(bundle: &TranslationBundle) -> BTreeSet<&str> {
        bundle.fields().iter().map(|(field, _)| field.as_str()).collect()
    }

    fn is_field_name(field: &str) -> bool {
        let regex = FIELD_NAME_REGEX.get_or_init(|| Regex::new(r"^[A-Z][A-Za-z0-9]*$").unwrap());
        regex.is_match(field)
    }

    fn is_language_code(code: &str) -> bool {
        let regex = LANGUAGE_CODE_REGEX.get_or_init(|| Regex::new(r"^[a-z]{3}$").unwrap());
        regex.is_match(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Language, TranslationFields};
    use uuid::Uuid;

    fn bundle(language: Language, pairs: &[(&str, &str)]) -> TranslationBundle {
        TranslationBundle::attach(
            TranslationFields::new(pairs.iter().copied()),
            Uuid::from_u128(1),
            language,
            "Role",
        )
    }

    // ==================== Field Name Tests ====================

    #[test]
    fn test_field_name_pascal_case() {
        assert!(TranslationValidator::is_field_name("Name"));
        assert!(TranslationValidator::is_field_name("Description2"));
        assert!(!TranslationValidator::is_field_name("name"));
        assert!(!TranslationValidator::is_field_name(""));
        assert!(!TranslationValidator::is_field_name("Icon Url"));
    }

    #[test]
    fn test_language_code_shape() {
        assert!(TranslationValidator::is_language_code("eng"));
        assert!(!TranslationValidator::is_language_code("en"));
        assert!(!TranslationValidator::is_language_code("ENG"));
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_validate_matching_bundles_is_clean() {
        let en = bundle(Language::ENGLISH, &[("Name", "Rightholder"), ("Description", "Receives")]);
        let nn = bundle(Language::NYNORSK, &[("Name", "Rettshavar"), ("Description", "Mottek")]);

        let report = TranslationValidator::validate("Rightholder", Some(&en), Some(&nn));
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_validate_no_bundles_is_clean() {
        assert!(TranslationValidator::validate("Assignment", None, None).is_clean());
    }

    #[test]
    fn test_validate_single_language_warns() {
        let en = bundle(Language::ENGLISH, &[("Name", "Agent")]);
        let report = TranslationValidator::validate("Agent", Some(&en), None);

        assert!(!report.has_errors());
        assert!(report.warnings[0].contains("only eng translation present"));
    }

    #[test]
    fn test_validate_field_mismatch_warns() {
        let en = bundle(Language::ENGLISH, &[("Name", "Open"), ("Description", "Request is open")]);
        let nn = bundle(Language::NYNORSK, &[("Name", "Open")]);

        let report = TranslationValidator::validate("Open", Some(&en), Some(&nn));
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("field mismatch"));
    }

    #[test]
    fn test_validate_repeated_field_is_error() {
        let en = bundle(Language::ENGLISH, &[("Name", "A"), ("Name", "B")]);
        let nn = bundle(Language::NYNORSK, &[("Name", "A")]);

        let report = TranslationValidator::validate("Dup", Some(&en), Some(&nn));
        assert!(report.has_errors());
        assert!(report.errors[0].contains("repeated"));
    }

    #[test]
    fn test_validate_bad_field_name_and_blank_value() {
        let en = bundle(Language::ENGLISH, &[("name", "")]);
        let nn = bundle(Language::NYNORSK, &[("name", "x")]);

        let report = TranslationValidator::validate("Broken", Some(&en), Some(&nn));
        assert_eq!(report.errors.len(), 2);
        assert!(report.warnings.iter().any(|w| w.contains("blank value")));
    }
}
