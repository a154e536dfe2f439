use crate::constants::{ConstantEntry, ConstantFamily, ConstantSource, FamilyRegistry};
use crate::error::CatalogError;
use crate::families::ProviderConstants;
use crate::i18n::TranslationFields;
use crate::models::EntityType;
use uuid::Uuid;

/// Kinds of parties known to access management.
pub struct EntityTypeConstants;

impl EntityTypeConstants {
    pub const ORGANISATION: Uuid = Uuid::from_u128(0x8c216e2f_afdd_4234_9ba2_691c727bb33d);
    pub const PERSON: Uuid = Uuid::from_u128(0xbfe09e70_e868_44b3_8d81_dfe0e13e058a);
    pub const SYSTEM_USER: Uuid = Uuid::from_u128(0xfe643898_2f47_4080_85e3_86bf6fe39630);
    pub const INTERNAL: Uuid = Uuid::from_u128(0x4557cc81_c10d_40b4_8134_f8825060016e);

    pub fn organisation() -> &'static ConstantEntry<EntityType> {
        Self::require(Self::ORGANISATION)
    }

    pub fn person() -> &'static ConstantEntry<EntityType> {
        Self::require(Self::PERSON)
    }

    pub fn system_user() -> &'static ConstantEntry<EntityType> {
        Self::require(Self::SYSTEM_USER)
    }

    pub fn internal() -> &'static ConstantEntry<EntityType> {
        Self::require(Self::INTERNAL)
    }
}

impl ConstantSource for EntityTypeConstants {
    type Entity = EntityType;
    const FAMILY: &'static str = "EntityType";

    fn declare() -> Result<Vec<ConstantEntry<EntityType>>, CatalogError> {
        let entity_type = |id: Uuid, name: &str, en: &str, nn: &str| {
            ConstantEntry::new(id, |id| EntityType {
                id,
                name: name.to_string(),
                provider_id: ProviderConstants::ALTINN3,
            })
            .map(|entry| {
                entry
                    .with_english(TranslationFields::new([("Name", en)]))
                    .with_nynorsk(TranslationFields::new([("Name", nn)]))
            })
        };

        Ok(vec![
            entity_type(Self::ORGANISATION, "Organisasjon", "Organization", "Organisasjon")?,
            entity_type(Self::PERSON, "Person", "Person", "Person")?,
            entity_type(Self::SYSTEM_USER, "Systembruker", "SystemUser", "Systembrukar")?,
            entity_type(Self::INTERNAL, "Intern", "Internal", "Intern")?,
        ])
    }
}

impl ConstantFamily for EntityTypeConstants {
    fn registry() -> &'static FamilyRegistry<EntityType> {
        static REGISTRY: FamilyRegistry<EntityType> = FamilyRegistry::new();
        &REGISTRY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_bokmal() {
        assert_eq!(EntityTypeConstants::system_user().name(), "Systembruker");
        assert_eq!(
            EntityTypeConstants::try_get_by_name("organisasjon").map(|e| e.id()),
            Some(EntityTypeConstants::ORGANISATION)
        );
        // English text is a translation, not a name
        assert!(EntityTypeConstants::try_get_by_name("Organization").is_none());
    }

    #[test]
    fn test_every_type_belongs_to_altinn3() {
        assert!(EntityTypeConstants::all_entities()
            .iter()
            .all(|e| e.entity().provider_id == ProviderConstants::ALTINN3));
    }

    #[test]
    fn test_row_count() {
        // 4 entries, both languages, one field each
        assert_eq!(EntityTypeConstants::all_translations().len(), 2 * 4);
    }
}
