use crate::constants::{Entity, IntoEntryId};
use crate::error::CatalogError;
use crate::i18n::{Language, TranslationBundle, TranslationEntry, TranslationFields};
use std::collections::BTreeMap;
use uuid::Uuid;

/// One immutable constant: identifier, payload and up to two translations.
///
/// ```rust
/// use constant_catalog::constants::ConstantEntry;
/// use constant_catalog::i18n::TranslationFields;
/// use constant_catalog::models::ProviderType;
///
/// let entry = ConstantEntry::new("0195efb8-7c80-7a4c-b8a3-2d5d8b9c6e11", |id| ProviderType {
///     id,
///     name: "System".to_string(),
/// })
/// .unwrap()
/// .with_english(TranslationFields::new([("Name", "System")]));
///
/// assert_eq!(entry.entity().id, entry.id());
/// assert_eq!(entry.translations().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ConstantEntry<E> {
    id: Uuid,
    entity: E,
    english: Option<TranslationBundle>,
    nynorsk: Option<TranslationBundle>,
}

impl<E: Entity> ConstantEntry<E> {
    /// Declare an entry. `build` receives the parsed identifier and must store it
    /// as the payload's id.
    pub fn new(id: impl IntoEntryId, build: impl FnOnce(Uuid) -> E) -> Result<Self, CatalogError> {
        let id = id.into_entry_id()?;
        let entity = build(id);

        if entity.id() != id {
            return Err(CatalogError::IdMismatch {
                kind: E::KIND,
                expected: id,
                actual: entity.id(),
            });
        }

        Ok(Self {
            id,
            entity,
            english: None,
            nynorsk: None,
        })
    }

    /// Attach the English bundle, replacing any previous one.
    pub fn with_english(self, fields: TranslationFields) -> Self {
        self.with_translation(Language::ENGLISH, fields)
    }

    /// Attach the Nynorsk bundle, replacing any previous one.
    pub fn with_nynorsk(self, fields: TranslationFields) -> Self {
        self.with_translation(Language::NYNORSK, fields)
    }

    fn with_translation(mut self, language: Language, fields: TranslationFields) -> Self {
        let bundle = TranslationBundle::attach(fields, self.id, language, E::KIND);
        if language == Language::ENGLISH {
            self.english = Some(bundle);
        } else {
            self.nynorsk = Some(bundle);
        }
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn entity(&self) -> &E {
        &self.entity
    }

    pub fn name(&self) -> &str {
        self.entity.name()
    }

    pub fn english(&self) -> Option<&TranslationBundle> {
        self.english.as_ref()
    }

    pub fn nynorsk(&self) -> Option<&TranslationBundle> {
        self.nynorsk.as_ref()
    }

    /// Bundle for a translation slot; `None` for the base language.
    pub fn bundle(&self, language: Language) -> Option<&TranslationBundle> {
        if language == Language::ENGLISH {
            self.english()
        } else if language == Language::NYNORSK {
            self.nynorsk()
        } else {
            None
        }
    }

    /// All translations as flat rows: English fields first, then Nynorsk.
    pub fn translations(&self) -> Vec<TranslationEntry> {
        self.english
            .iter()
            .chain(self.nynorsk.iter())
            .flat_map(TranslationBundle::single_entries)
            .collect()
    }

    /// Field → text map for one language, if that slot is filled.
    pub fn translations_in(&self, language: Language) -> Option<BTreeMap<String, String>> {
        self.bundle(language).map(TranslationBundle::to_map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RequestStatus;

    const OPEN: &str = "0195efb8-7c80-7239-8ee5-7156872b53d1";

    fn open() -> ConstantEntry<RequestStatus> {
        ConstantEntry::new(OPEN, |id| RequestStatus {
            id,
            name: "Åpen".to_string(),
            description: "Forespørselen er åpen".to_string(),
        })
        .expect("Should declare")
        .with_english(TranslationFields::new([
            ("Name", "Open"),
            ("Description", "Request is open"),
        ]))
        .with_nynorsk(TranslationFields::new([
            ("Name", "Åpen"),
            ("Description", "Førespurnaden er open"),
        ]))
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_payload_receives_entry_id() {
        let entry = open();
        assert_eq!(entry.id().to_string(), OPEN);
        assert_eq!(entry.entity().id, entry.id());
        assert_eq!(entry.name(), "Åpen");
    }

    #[test]
    fn test_invalid_id_is_parse_error() {
        let result = ConstantEntry::new("0195efb8-XXXX", |id| RequestStatus {
            id,
            name: "Broken".to_string(),
            description: String::new(),
        });
        assert!(matches!(result, Err(CatalogError::InvalidId { .. })));
    }

    #[test]
    fn test_payload_ignoring_id_is_rejected() {
        let result = ConstantEntry::new(OPEN, |_| RequestStatus {
            id: Uuid::nil(),
            name: "Stale".to_string(),
            description: String::new(),
        });
        assert!(matches!(
            result,
            Err(CatalogError::IdMismatch { kind: "RequestStatus", .. })
        ));
    }

    // ==================== Bundle Tests ====================

    #[test]
    fn test_bundles_are_stamped() {
        let entry = open();
        let en = entry.english().expect("English set");
        let nn = entry.nynorsk().expect("Nynorsk set");

        assert_eq!(en.owner_id(), entry.id());
        assert_eq!(en.language().code(), "eng");
        assert_eq!(en.entity_kind(), "RequestStatus");
        assert_eq!(nn.owner_id(), entry.id());
        assert_eq!(nn.language().code(), "nno");
    }

    #[test]
    fn test_translations_english_then_nynorsk() {
        let rows = open().translations();
        let shape: Vec<_> = rows
            .iter()
            .map(|r| (r.language_code.as_str(), r.field_name.as_str()))
            .collect();

        assert_eq!(
            shape,
            vec![
                ("eng", "Name"),
                ("eng", "Description"),
                ("nno", "Name"),
                ("nno", "Description"),
            ]
        );
    }

    #[test]
    fn test_no_bundles_no_translations() {
        let entry = ConstantEntry::new(OPEN, |id| RequestStatus {
            id,
            name: "Åpen".to_string(),
            description: String::new(),
        })
        .expect("Should declare");

        assert!(entry.translations().is_empty());
        assert!(entry.translations_in(Language::ENGLISH).is_none());
    }

    #[test]
    fn test_translations_in_base_language_is_none() {
        let entry = open();
        assert!(entry.translations_in(Language::BOKMAL).is_none());
        let nn = entry.translations_in(Language::NYNORSK).expect("Nynorsk set");
        assert_eq!(nn["Description"], "Førespurnaden er open");
    }

    #[test]
    fn test_reattaching_replaces_slot() {
        let entry = open().with_english(TranslationFields::new([("Name", "Opened")]));
        assert_eq!(entry.english().and_then(|b| b.get("Name")), Some("Opened"));
        assert_eq!(entry.translations().len(), 3);
    }
}
