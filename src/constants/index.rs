//! Name and identifier indices over one family's declared entries.
//!
//! Shared by the typed registry and the token-keyed lookup cache; both build a
//! `FamilyIndex` exactly once per family and only read it afterwards.

use crate::constants::{CatalogMetrics, ConstantEntry, Entity};
use crate::error::CatalogError;
use crate::i18n::{Language, TranslationEntry};
use std::collections::hash_map::Entry as MapEntry;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;
use uuid::Uuid;

/// Read-only lookup structure for one family.
#[derive(Debug)]
pub struct FamilyIndex<E> {
    family: &'static str,
    entries: Vec<ConstantEntry<E>>,
    by_id: HashMap<Uuid, usize>,
    by_name: HashMap<String, usize>,
    by_urn: HashMap<String, usize>,
    by_code: HashMap<String, usize>,
}

/// Case-insensitive key used by the name, urn and code indices.
///
/// Maps one character at a time to its single-character uppercase form, so a
/// key never changes length and final sigma folds like any other sigma.
/// Characters whose uppercase expands (`ß`) are kept as they are.
fn fold(key: &str) -> String {
    key.chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            }
        })
        .collect()
}

impl<E: Entity> FamilyIndex<E> {
    /// Index `entries` in declaration order.
    ///
    /// Fails on the first repeated identifier, name, urn or code.
    pub fn build(family: &'static str, entries: Vec<ConstantEntry<E>>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(entries.len());
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_urn = HashMap::new();
        let mut by_code = HashMap::new();

        for (position, entry) in entries.iter().enumerate() {
            if by_id.insert(entry.id(), position).is_some() {
                return Err(CatalogError::DuplicateId {
                    family,
                    id: entry.id(),
                });
            }

            match by_name.entry(fold(entry.name())) {
                MapEntry::Occupied(_) => {
                    return Err(CatalogError::DuplicateName {
                        family,
                        name: entry.name().to_string(),
                    })
                }
                MapEntry::Vacant(slot) => {
                    slot.insert(position);
                }
            }

            if let Some(urn) = entry.entity().urn() {
                insert_key(&mut by_urn, family, "urn", urn, position)?;
            }
            if let Some(code) = entry.entity().code() {
                insert_key(&mut by_code, family, "code", code, position)?;
            }
        }

        debug!("Indexed {} constants for family {}", entries.len(), family);
        CatalogMetrics::global().record_index_build();

        Ok(Self {
            family,
            entries,
            by_id,
            by_name,
            by_urn,
            by_code,
        })
    }

    pub fn family(&self) -> &'static str {
        self.family
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive name lookup.
    pub fn try_get_by_name(&self, name: &str) -> Option<&ConstantEntry<E>> {
        self.resolve(self.by_name.get(&fold(name)))
    }

    pub fn try_get_by_id(&self, id: Uuid) -> Option<&ConstantEntry<E>> {
        self.resolve(self.by_id.get(&id))
    }

    /// Case-insensitive urn lookup; entities without an urn are not indexed.
    pub fn try_get_by_urn(&self, urn: &str) -> Option<&ConstantEntry<E>> {
        self.resolve(self.by_urn.get(&fold(urn)))
    }

    /// Case-insensitive code lookup; entities without a code are not indexed.
    pub fn try_get_by_code(&self, code: &str) -> Option<&ConstantEntry<E>> {
        self.resolve(self.by_code.get(&fold(code)))
    }

    /// Match by name first, then by `value` parsed as an identifier.
    pub fn try_get_by_any(&self, value: &str) -> Option<&ConstantEntry<E>> {
        if let Some(entry) = self.try_get_by_name(value) {
            return Some(entry);
        }

        let id = Uuid::parse_str(value.trim()).ok()?;
        self.try_get_by_id(id)
    }

    /// Every entry in declaration order.
    pub fn all_entities(&self) -> &[ConstantEntry<E>] {
        &self.entries
    }

    /// Flat translation rows of every entry, in entry order.
    pub fn all_translations(&self) -> Vec<TranslationEntry> {
        self.entries
            .iter()
            .flat_map(ConstantEntry::translations)
            .collect()
    }

    /// Translated fields of one entry in one language.
    ///
    /// `None` for the base language (payload text is already in it), for
    /// unknown ids and for entries without a bundle in `language`.
    pub fn translations_for(&self, id: Uuid, language: Language) -> Option<BTreeMap<String, String>> {
        if language.is_base() {
            return None;
        }
        self.try_get_by_id(id)?.translations_in(language)
    }

    fn resolve(&self, position: Option<&usize>) -> Option<&ConstantEntry<E>> {
        let found = position.map(|&i| &self.entries[i]);
        CatalogMetrics::global().record_lookup(found.is_some());
        found
    }
}

fn insert_key(
    index: &mut HashMap<String, usize>,
    family: &'static str,
    key: &'static str,
    value: &str,
    position: usize,
) -> Result<(), CatalogError> {
    match index.entry(fold(value)) {
        MapEntry::Occupied(_) => Err(CatalogError::DuplicateKey {
            family,
            key,
            value: value.to_string(),
        }),
        MapEntry::Vacant(slot) => {
            slot.insert(position);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::TranslationFields;
    use crate::models::{Area, Provider, ProviderType};
    use proptest::prelude::*;

    const SYSTEM: &str = "0195efb8-7c80-7a4c-b8a3-2d5d8b9c6e11";
    const SERVICE_OWNER: &str = "0195efb8-7c80-7e1f-9c4d-5b7a3e2f1d22";

    fn provider_type(id: &str, name: &str, en: &str, nn: &str) -> ConstantEntry<ProviderType> {
        ConstantEntry::new(id, |id| ProviderType {
            id,
            name: name.to_string(),
        })
        .expect("Should declare")
        .with_english(TranslationFields::new([("Name", en)]))
        .with_nynorsk(TranslationFields::new([("Name", nn)]))
    }

    fn index() -> FamilyIndex<ProviderType> {
        FamilyIndex::build(
            "ProviderType",
            vec![
                provider_type(SYSTEM, "System", "System", "System"),
                provider_type(SERVICE_OWNER, "Tjenesteeier", "ServiceOwner", "Tenesteeigar"),
            ],
        )
        .expect("Should index")
    }

    fn provider(id: u128, name: &str, code: &str) -> ConstantEntry<Provider> {
        ConstantEntry::new(Uuid::from_u128(id), |id| Provider {
            id,
            name: name.to_string(),
            ref_id: None,
            code: code.to_string(),
            type_id: Uuid::nil(),
        })
        .expect("Should declare")
    }

    fn area(id: u128, name: &str, urn: &str) -> ConstantEntry<Area> {
        ConstantEntry::new(Uuid::from_u128(id), |id| Area {
            id,
            name: name.to_string(),
            description: String::new(),
            icon_url: String::new(),
            group_id: Uuid::nil(),
            urn: urn.to_string(),
        })
        .expect("Should declare")
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_lookup_by_name_ignores_case() {
        let index = index();
        for name in ["system", "SYSTEM", "System", "sYsTeM"] {
            let entry = index.try_get_by_name(name).expect("Should find");
            assert_eq!(entry.id().to_string(), SYSTEM);
        }
        assert!(index.try_get_by_name("tjenesteeier").is_some());
        assert!(index.try_get_by_name("ServiceOwner").is_none());
    }

    #[test]
    fn test_fold_is_per_character() {
        assert_eq!(fold("ΟΔΟΣ"), fold("οδος"));
        assert_eq!(fold("οδοσ"), fold("οδος"));
        assert_eq!(fold("Særskilt"), "SÆRSKILT");
        assert_eq!(fold("straße"), "STRAßE");
        assert_ne!(fold("straße"), fold("STRASSE"));
        assert_eq!(fold("İstanbul").chars().count(), "İstanbul".chars().count());
    }

    #[test]
    fn test_lookup_by_id() {
        let index = index();
        let id = Uuid::parse_str(SERVICE_OWNER).unwrap();
        assert_eq!(index.try_get_by_id(id).map(|e| e.name()), Some("Tjenesteeier"));
        assert!(index.try_get_by_id(Uuid::nil()).is_none());
    }

    #[test]
    fn test_lookup_by_any() {
        let index = index();
        assert_eq!(index.try_get_by_any("system").map(|e| e.id().to_string()), Some(SYSTEM.to_string()));
        assert_eq!(
            index.try_get_by_any(SERVICE_OWNER).map(|e| e.name()),
            Some("Tjenesteeier")
        );
        assert!(index.try_get_by_any("not-a-guid-and-not-a-known-name").is_none());
        assert!(index
            .try_get_by_any("00000000-0000-0000-0000-000000000000")
            .is_none());
    }

    #[test]
    fn test_lookup_by_code() {
        let index = FamilyIndex::build(
            "Provider",
            vec![provider(1, "Altinn 3", "sys-altinn3"), provider(2, "Altinn 2", "sys-altinn2")],
        )
        .expect("Should index");

        assert_eq!(index.try_get_by_code("SYS-ALTINN2").map(|e| e.name()), Some("Altinn 2"));
        assert!(index.try_get_by_code("sys-altinn1").is_none());
        assert!(index.try_get_by_urn("urn:anything").is_none());
    }

    #[test]
    fn test_lookup_by_urn() {
        let index = FamilyIndex::build(
            "Area",
            vec![
                area(1, "Personale", "accesspackage:area:personale"),
                area(2, "Post og arkiv", "accesspackage:area:post_og_arkiv"),
            ],
        )
        .expect("Should index");

        let entry = index
            .try_get_by_urn("AccessPackage:Area:Post_Og_Arkiv")
            .expect("Should find by urn");
        assert_eq!(entry.name(), "Post og arkiv");
        assert!(index.try_get_by_urn("accesspackage:area:ukjent").is_none());
        assert!(index.try_get_by_code("accesspackage:area:personale").is_none());
    }

    // ==================== Projection Tests ====================

    #[test]
    fn test_all_entities_in_declaration_order() {
        let names: Vec<_> = index().all_entities().iter().map(|e| e.name().to_string()).collect();
        assert_eq!(names, vec!["System", "Tjenesteeier"]);
    }

    #[test]
    fn test_all_translations_provider_type_scenario() {
        let rows = index().all_translations();
        let shape: Vec<_> = rows
            .iter()
            .map(|r| (r.id.to_string(), r.language_code.as_str(), r.field_name.as_str(), r.value.as_str()))
            .collect();

        assert_eq!(
            shape,
            vec![
                (SYSTEM.to_string(), "eng", "Name", "System"),
                (SYSTEM.to_string(), "nno", "Name", "System"),
                (SERVICE_OWNER.to_string(), "eng", "Name", "ServiceOwner"),
                (SERVICE_OWNER.to_string(), "nno", "Name", "Tenesteeigar"),
            ]
        );
    }

    #[test]
    fn test_translations_for() {
        let index = index();
        let id = Uuid::parse_str(SERVICE_OWNER).unwrap();

        let nn = index.translations_for(id, Language::NYNORSK).expect("Should translate");
        assert_eq!(nn["Name"], "Tenesteeigar");
        assert!(index.translations_for(id, Language::BOKMAL).is_none());
        assert!(index.translations_for(Uuid::nil(), Language::ENGLISH).is_none());
    }

    // ==================== Duplicate Tests ====================

    #[test]
    fn test_duplicate_id_rejected() {
        let result = FamilyIndex::build(
            "ProviderType",
            vec![
                provider_type(SYSTEM, "System", "System", "System"),
                provider_type(SYSTEM, "Other", "Other", "Other"),
            ],
        );
        assert!(matches!(result, Err(CatalogError::DuplicateId { family: "ProviderType", .. })));
    }

    #[test]
    fn test_duplicate_name_rejected_case_insensitive() {
        let result = FamilyIndex::build(
            "ProviderType",
            vec![
                provider_type(SYSTEM, "System", "System", "System"),
                provider_type(SERVICE_OWNER, "SYSTEM", "System", "System"),
            ],
        );
        assert_eq!(
            result.err(),
            Some(CatalogError::DuplicateName {
                family: "ProviderType",
                name: "SYSTEM".to_string()
            })
        );
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let result = FamilyIndex::build(
            "Provider",
            vec![provider(1, "A", "same"), provider(2, "B", "Same")],
        );
        assert!(matches!(result, Err(CatalogError::DuplicateKey { key: "code", .. })));
    }

    #[test]
    fn test_duplicate_urn_rejected_case_insensitive() {
        let result = FamilyIndex::build(
            "Area",
            vec![
                area(1, "Personale", "accesspackage:area:personale"),
                area(2, "Personell", "ACCESSPACKAGE:AREA:PERSONALE"),
            ],
        );
        assert_eq!(
            result.err(),
            Some(CatalogError::DuplicateKey {
                family: "Area",
                key: "urn",
                value: "ACCESSPACKAGE:AREA:PERSONALE".to_string()
            })
        );
    }

    #[test]
    fn test_empty_family() {
        let index = FamilyIndex::<ProviderType>::build("Empty", Vec::new()).expect("Should index");
        assert!(index.is_empty());
        assert!(index.all_translations().is_empty());
        assert!(index.try_get_by_name("anything").is_none());
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_every_entry_found_by_id_and_any_casing(
            names in proptest::collection::btree_set("[a-z]{1,12}", 1..20),
            upper in any::<bool>(),
        ) {
            let entries: Vec<_> = names
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    ConstantEntry::new(Uuid::from_u128(i as u128 + 1), |id| ProviderType {
                        id,
                        name: name.clone(),
                    })
                    .unwrap()
                })
                .collect();
            let index = FamilyIndex::build("Generated", entries).unwrap();

            prop_assert_eq!(index.len(), names.len());
            for entry in index.all_entities() {
                let query = if upper { entry.name().to_uppercase() } else { entry.name().to_string() };
                prop_assert_eq!(index.try_get_by_id(entry.id()).map(|e| e.id()), Some(entry.id()));
                prop_assert_eq!(index.try_get_by_name(&query).map(|e| e.id()), Some(entry.id()));
            }
        }
    }
}
