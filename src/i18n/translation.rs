//! Translation bundles attached to constant entries and their flat row form.

use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

/// Ordered field-name → text pairs as written by the author of a constant.
///
/// Carries no identity; the owning entry supplies id, language and kind when
/// the fields are attached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationFields {
    fields: Vec<(String, String)>,
}

impl TranslationFields {
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One language's translated fields for one constant entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationBundle {
    owner_id: Uuid,
    language: Language,
    entity_kind: &'static str,
    fields: Vec<(String, String)>,
}

impl TranslationBundle {
    /// Bind authored fields to their owner. Only constant entries call this.
    pub(crate) fn attach(
        fields: TranslationFields,
        owner_id: Uuid,
        language: Language,
        entity_kind: &'static str,
    ) -> Self {
        Self {
            owner_id,
            language,
            entity_kind,
            fields: fields.fields,
        }
    }

    pub fn owner_id(&self) -> Uuid {
        self.owner_id
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn entity_kind(&self) -> &'static str {
        self.entity_kind
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Text of one field, if present.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Flatten into one row per field, in declaration order.
    pub fn single_entries(&self) -> Vec<TranslationEntry> {
        self.fields
            .iter()
            .map(|(field, value)| TranslationEntry {
                id: self.owner_id,
                kind: self.entity_kind.to_string(),
                language_code: self.language.code().to_string(),
                field_name: field.clone(),
                value: value.clone(),
            })
            .collect()
    }

    /// Field → text map; a repeated field keeps its last value.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.fields.iter().cloned().collect()
    }
}

/// A single translated field, the shape seeded into the translation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationEntry {
    pub id: Uuid,

    /// Entity kind the row belongs to (e.g., "ProviderType")
    #[serde(rename = "type")]
    pub kind: String,

    pub language_code: String,
    pub field_name: String,
    pub value: String,
}

/// Outcome of merging translation rows into an existing set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MergeStats {
    pub inserted: usize,
    pub updated: usize,
    pub unchanged: usize,
}

/// Upsert `incoming` rows into `existing`, keyed by (id, kind, language, field).
///
/// Matching rows get the incoming value; new rows are appended in incoming order.
pub fn merge_translations(
    existing: &mut Vec<TranslationEntry>,
    incoming: impl IntoIterator<Item = TranslationEntry>,
) -> MergeStats {
    let mut stats = MergeStats::default();
    let mut positions: HashMap<(Uuid, String, String, String), usize> = existing
        .iter()
        .enumerate()
        .map(|(i, row)| (row_key(row), i))
        .collect();

    for row in incoming {
        let key = row_key(&row);
        match positions.get(&key) {
            Some(&i) if existing[i].value == row.value => stats.unchanged += 1,
            Some(&i) => {
                existing[i].value = row.value;
                stats.updated += 1;
            }
            None => {
                positions.insert(key, existing.len());
                existing.push(row);
                stats.inserted += 1;
            }
        }
    }

    stats
}

fn row_key(row: &TranslationEntry) -> (Uuid, String, String, String) {
    (
        row.id,
        row.kind.clone(),
        row.language_code.clone(),
        row.field_name.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle() -> TranslationBundle {
        TranslationBundle::attach(
            TranslationFields::new([("Name", "Accepted"), ("Description", "Request is accepted")]),
            Uuid::from_u128(7),
            Language::ENGLISH,
            "RequestStatus",
        )
    }

    fn row(id: u128, field: &str, value: &str) -> TranslationEntry {
        TranslationEntry {
            id: Uuid::from_u128(id),
            kind: "Reason".to_string(),
            language_code: "eng".to_string(),
            field_name: field.to_string(),
            value: value.to_string(),
        }
    }

    // ==================== Bundle Tests ====================

    #[test]
    fn test_attach_sets_identity() {
        let bundle = bundle();
        assert_eq!(bundle.owner_id(), Uuid::from_u128(7));
        assert_eq!(bundle.language(), Language::ENGLISH);
        assert_eq!(bundle.entity_kind(), "RequestStatus");
        assert_eq!(bundle.get("Name"), Some("Accepted"));
        assert_eq!(bundle.get("Missing"), None);
    }

    #[test]
    fn test_single_entries_keep_declaration_order() {
        let rows = bundle().single_entries();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].field_name, "Name");
        assert_eq!(rows[1].field_name, "Description");
        assert!(rows.iter().all(|r| r.language_code == "eng"));
        assert!(rows.iter().all(|r| r.kind == "RequestStatus"));
        assert!(rows.iter().all(|r| r.id == Uuid::from_u128(7)));
    }

    #[test]
    fn test_empty_fields_flatten_to_nothing() {
        let bundle = TranslationBundle::attach(
            TranslationFields::default(),
            Uuid::nil(),
            Language::NYNORSK,
            "Reason",
        );
        assert!(bundle.single_entries().is_empty());
    }

    #[test]
    fn test_translation_entry_serializes_type_key() {
        let json = serde_json::to_value(row(1, "Name", "Mapped")).expect("Should serialize");
        assert_eq!(json["type"], "Reason");
        assert_eq!(json["field_name"], "Name");
    }

    // ==================== Merge Tests ====================

    #[test]
    fn test_merge_inserts_updates_and_skips() {
        let mut existing = vec![row(1, "Name", "Old"), row(2, "Name", "Same")];
        let stats = merge_translations(
            &mut existing,
            vec![row(1, "Name", "New"), row(2, "Name", "Same"), row(3, "Name", "Fresh")],
        );

        assert_eq!(
            stats,
            MergeStats {
                inserted: 1,
                updated: 1,
                unchanged: 1
            }
        );
        assert_eq!(existing.len(), 3);
        assert_eq!(existing[0].value, "New");
        assert_eq!(existing[2].value, "Fresh");
    }

    #[test]
    fn test_merge_distinguishes_language() {
        let mut existing = vec![row(1, "Name", "Mapped")];
        let mut nynorsk = row(1, "Name", "Kartlagd");
        nynorsk.language_code = "nno".to_string();

        let stats = merge_translations(&mut existing, vec![nynorsk]);
        assert_eq!(stats.inserted, 1);
        assert_eq!(existing.len(), 2);
    }
}
