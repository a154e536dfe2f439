use crate::constants::{ConstantEntry, ConstantFamily, ConstantSource, FamilyRegistry};
use crate::error::CatalogError;
use crate::families::EntityTypeConstants;
use crate::i18n::TranslationFields;
use crate::models::AreaGroup;
use uuid::Uuid;

/// Groups that organise the authorization areas.
pub struct AreaGroupConstants;

impl AreaGroupConstants {
    pub const GENERAL: Uuid = Uuid::from_u128(0x7e2a3af8_08cb_43a9_bdd7_7d5c7e377145);
    pub const INDUSTRY: Uuid = Uuid::from_u128(0x3757643a_316d_4d0e_a52b_4dc7cdebc0b4);
    pub const SPECIAL: Uuid = Uuid::from_u128(0x554f0321_53b8_4d97_be12_6a585c507159);
    pub const INHABITANT: Uuid = Uuid::from_u128(0x413f99ca_19ca_4124_8470_b0c1dba3d2ee);

    pub fn general() -> &'static ConstantEntry<AreaGroup> {
        Self::require(Self::GENERAL)
    }

    pub fn industry() -> &'static ConstantEntry<AreaGroup> {
        Self::require(Self::INDUSTRY)
    }

    pub fn special() -> &'static ConstantEntry<AreaGroup> {
        Self::require(Self::SPECIAL)
    }

    pub fn inhabitant() -> &'static ConstantEntry<AreaGroup> {
        Self::require(Self::INHABITANT)
    }
}

impl ConstantSource for AreaGroupConstants {
    type Entity = AreaGroup;
    const FAMILY: &'static str = "AreaGroup";

    fn declare() -> Result<Vec<ConstantEntry<AreaGroup>>, CatalogError> {
        // Groups carry no urn; only their areas do
        let group = |id: Uuid, name: &str, description: &str, entity_type_id: Uuid, en: &str, nn: &str| {
            ConstantEntry::new(id, |id| AreaGroup {
                id,
                name: name.to_string(),
                description: description.to_string(),
                entity_type_id,
                urn: None,
            })
            .map(|entry| {
                entry
                    .with_english(TranslationFields::new([("Name", en)]))
                    .with_nynorsk(TranslationFields::new([("Name", nn)]))
            })
        };

        let organisation = EntityTypeConstants::ORGANISATION;
        Ok(vec![
            group(Self::GENERAL, "Allment", "Standard gruppe", organisation, "General", "Allment")?,
            group(Self::INDUSTRY, "Bransje", "For bransje grupper", organisation, "Industry", "Bransje")?,
            group(Self::SPECIAL, "Særskilt", "For de sære tingene", organisation, "Special", "Særskilt")?,
            group(
                Self::INHABITANT,
                "Innbygger",
                "For innbyggere",
                EntityTypeConstants::PERSON,
                "Inhabitant",
                "innbyggjar",
            )?,
        ])
    }
}

impl ConstantFamily for AreaGroupConstants {
    fn registry() -> &'static FamilyRegistry<AreaGroup> {
        static REGISTRY: FamilyRegistry<AreaGroup> = FamilyRegistry::new();
        &REGISTRY
    }
}
