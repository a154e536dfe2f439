use crate::constants::{ConstantEntry, ConstantFamily, ConstantSource, FamilyRegistry};
use crate::error::CatalogError;
use crate::i18n::TranslationFields;
use crate::models::ProviderType;
use uuid::Uuid;

/// Provider categories.
pub struct ProviderTypeConstants;

impl ProviderTypeConstants {
    pub const SYSTEM: Uuid = Uuid::from_u128(0x0195efb8_7c80_7a4c_b8a3_2d5d8b9c6e11);
    pub const SERVICE_OWNER: Uuid = Uuid::from_u128(0x0195efb8_7c80_7e1f_9c4d_5b7a3e2f1d22);

    /// Providers operated by the platform itself.
    pub fn system() -> &'static ConstantEntry<ProviderType> {
        Self::require(Self::SYSTEM)
    }

    pub fn service_owner() -> &'static ConstantEntry<ProviderType> {
        Self::require(Self::SERVICE_OWNER)
    }
}

impl ConstantSource for ProviderTypeConstants {
    type Entity = ProviderType;
    const FAMILY: &'static str = "ProviderType";

    fn declare() -> Result<Vec<ConstantEntry<ProviderType>>, CatalogError> {
        let provider_type = |id: Uuid, name: &str, en: &str, nn: &str| {
            ConstantEntry::new(id, |id| ProviderType {
                id,
                name: name.to_string(),
            })
            .map(|entry| {
                entry
                    .with_english(TranslationFields::new([("Name", en)]))
                    .with_nynorsk(TranslationFields::new([("Name", nn)]))
            })
        };

        Ok(vec![
            provider_type(Self::SYSTEM, "System", "System", "System")?,
            provider_type(Self::SERVICE_OWNER, "Tjenesteeier", "ServiceOwner", "Tenesteeigar")?,
        ])
    }
}

impl ConstantFamily for ProviderTypeConstants {
    fn registry() -> &'static FamilyRegistry<ProviderType> {
        static REGISTRY: FamilyRegistry<ProviderType> = FamilyRegistry::new();
        &REGISTRY
    }
}
