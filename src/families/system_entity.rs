use crate::constants::{ConstantEntry, ConstantLookup, ConstantSource, OwnerToken};
use crate::error::CatalogError;
use crate::families::EntityTypeConstants;
use crate::i18n::{TranslationEntry, TranslationFields};
use crate::models::SystemEntity;
use uuid::Uuid;

/// Standard variant of internal entities.
const STANDARD_VARIANT: Uuid = Uuid::from_u128(0xcbe2834d_3db0_4a14_baa2_d32de004d6d7);

/// Internal actors recorded as performers of automated changes.
pub struct SystemEntityConstants;

impl SystemEntityConstants {
    pub const STATIC_DATA_INGEST: &'static str = "3296007f-f9ea-4bd0-b6a6-c8462d54633a";
    pub const ENDUSER_API: &'static str = "ed771364-42a8-4934-801e-b482ed20ec3e";

    pub fn token() -> OwnerToken {
        OwnerToken::of::<Self>()
    }

    pub fn try_get_by_name(name: &str) -> Option<&'static ConstantEntry<SystemEntity>> {
        ConstantLookup::try_get_by_name(&Self::token(), name)
    }

    pub fn try_get_by_id(id: Uuid) -> Option<&'static ConstantEntry<SystemEntity>> {
        ConstantLookup::try_get_by_id(&Self::token(), id)
    }

    /// Lookup by external reference (e.g., "sys-static-data-ingest").
    pub fn try_get_by_ref_id(ref_id: &str) -> Option<&'static ConstantEntry<SystemEntity>> {
        ConstantLookup::try_get_by_code(&Self::token(), ref_id)
    }

    /// Name first, then identifier text.
    pub fn try_get_by_any(value: &str) -> Option<&'static ConstantEntry<SystemEntity>> {
        ConstantLookup::try_get_by_any(&Self::token(), value)
    }

    pub fn all_entities() -> &'static [ConstantEntry<SystemEntity>] {
        ConstantLookup::all_entities(&Self::token())
    }

    pub fn all_translations() -> Vec<TranslationEntry> {
        ConstantLookup::all_translations(&Self::token())
    }
}

impl ConstantSource for SystemEntityConstants {
    type Entity = SystemEntity;
    const FAMILY: &'static str = "SystemEntity";

    fn declare() -> Result<Vec<ConstantEntry<SystemEntity>>, CatalogError> {
        [
            (
                Self::STATIC_DATA_INGEST,
                "StaticDataIngest",
                "sys-static-data-ingest",
                "Static Data Ingest",
                "Statisk datainnlegging",
            ),
            (
                "efec83fc-deba-4f09-8073-b4dd19d0b16b",
                "RegisterImportSystem",
                "sys-register-import-system",
                "Register Import System",
                "Registerimportsystem",
            ),
            (
                "14fd92db-c124-4208-ba62-293cbabff2ad",
                "ResourceRegistryImportSystem",
                "sys-resource-register-import-system",
                "Resource Registry Import System",
                "Ressursregisterimportsystem",
            ),
            (
                "b96cda05-c0e0-4c59-b4b8-f15a7dff9590",
                "InternalApiImportSystem",
                "sys-internal-api-import-system",
                "Internal API Import System",
                "Internt API-importsystem",
            ),
            (
                "46cfa478-971f-446e-9bc1-af57469361d0",
                "Altinn2RoleImportSystem",
                "sys-altinn2-role-import-system",
                "Altinn2 Role Import System",
                "Altinn2 Role-importsystem",
            ),
            (
                Self::ENDUSER_API,
                "EnduserApi",
                "accessmgmt-enduser-api",
                "End User API",
                "Sluttbruker-API",
            ),
        ]
        .into_iter()
        .map(|(id, name, ref_id, en, nn)| -> Result<_, CatalogError> {
            Ok(ConstantEntry::new(id, |id| SystemEntity {
                id,
                name: name.to_string(),
                ref_id: ref_id.to_string(),
                type_id: EntityTypeConstants::INTERNAL,
                variant_id: Some(STANDARD_VARIANT),
            })?
            .with_english(TranslationFields::new([("Name", en)]))
            .with_nynorsk(TranslationFields::new([("Name", nn)])))
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_lookup_by_ref_id() {
        let entry = SystemEntityConstants::try_get_by_ref_id("sys-static-data-ingest").expect("Should find");
        assert_eq!(entry.id().to_string(), SystemEntityConstants::STATIC_DATA_INGEST);
        assert_eq!(entry.entity().type_id, EntityTypeConstants::INTERNAL);
    }

    #[test]
    fn test_try_get_by_any() {
        let by_id = SystemEntityConstants::try_get_by_any(SystemEntityConstants::ENDUSER_API)
            .expect("Should find by id");
        assert_eq!(by_id.name(), "EnduserApi");
        assert_eq!(
            by_id.translations_in(Language::NYNORSK).expect("Nynorsk set")["Name"],
            "Sluttbruker-API"
        );
        assert!(SystemEntityConstants::try_get_by_any("enduserapi").is_some());
        assert!(SystemEntityConstants::try_get_by_any("sys-unknown").is_none());
    }

    #[test]
    fn test_row_count() {
        let count = SystemEntityConstants::all_entities().len();
        assert_eq!(SystemEntityConstants::all_translations().len(), 2 * count);
    }
}
