use crate::constants::{ConstantEntry, ConstantFamily, ConstantSource, FamilyRegistry};
use crate::error::CatalogError;
use crate::families::ProviderTypeConstants;
use crate::i18n::TranslationFields;
use crate::models::Provider;
use uuid::Uuid;

/// Systems that own roles, packages and entity types.
pub struct ProviderConstants;

impl ProviderConstants {
    pub const ALTINN2: Uuid = Uuid::from_u128(0x0195efb8_7c80_7bb5_a35c_11d58ea36695);
    pub const ALTINN3: Uuid = Uuid::from_u128(0x0195efb8_7c80_7159_b5ba_0f2cb0c7ef8e);
    pub const CENTRAL_COORDINATING_REGISTER: Uuid =
        Uuid::from_u128(0x0195efb8_7c80_70cf_9a2c_1d4e2f7a8b3c);

    pub fn altinn2() -> &'static ConstantEntry<Provider> {
        Self::require(Self::ALTINN2)
    }

    pub fn altinn3() -> &'static ConstantEntry<Provider> {
        Self::require(Self::ALTINN3)
    }

    pub fn central_coordinating_register() -> &'static ConstantEntry<Provider> {
        Self::require(Self::CENTRAL_COORDINATING_REGISTER)
    }
}

impl ConstantSource for ProviderConstants {
    type Entity = Provider;
    const FAMILY: &'static str = "Provider";

    fn declare() -> Result<Vec<ConstantEntry<Provider>>, CatalogError> {
        Ok(vec![
            ConstantEntry::new(Self::ALTINN2, |id| Provider {
                id,
                name: "Altinn 2".to_string(),
                code: "sys-altinn2".to_string(),
                ref_id: None,
                type_id: ProviderTypeConstants::SYSTEM,
            })?
            .with_english(TranslationFields::new([("Name", "Altinn 2")]))
            .with_nynorsk(TranslationFields::new([("Name", "Altinn 2")])),
            ConstantEntry::new(Self::ALTINN3, |id| Provider {
                id,
                name: "Altinn 3".to_string(),
                code: "sys-altinn3".to_string(),
                ref_id: None,
                type_id: ProviderTypeConstants::SYSTEM,
            })?
            .with_english(TranslationFields::new([("Name", "Altinn 3")]))
            .with_nynorsk(TranslationFields::new([("Name", "Altinn 3")])),
            ConstantEntry::new(Self::CENTRAL_COORDINATING_REGISTER, |id| Provider {
                id,
                name: "Enhetsregisteret".to_string(),
                code: "sys-ccr".to_string(),
                ref_id: Some("ER".to_string()),
                type_id: ProviderTypeConstants::SYSTEM,
            })?
            .with_english(TranslationFields::new([("Name", "Central Coordinating Register")]))
            .with_nynorsk(TranslationFields::new([("Name", "Einingsregisteret")])),
        ])
    }
}

impl ConstantFamily for ProviderConstants {
    fn registry() -> &'static FamilyRegistry<Provider> {
        static REGISTRY: FamilyRegistry<Provider> = FamilyRegistry::new();
        &REGISTRY
    }
}
