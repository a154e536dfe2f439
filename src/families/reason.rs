use crate::constants::{ConstantEntry, ConstantLookup, ConstantSource, OwnerToken};
use crate::error::CatalogError;
use crate::i18n::TranslationEntry;
use crate::models::Reason;
use uuid::Uuid;

/// Why a connection between two parties exists.
///
/// Served through the token registry; reasons carry no translations.
pub struct ReasonConstants;

impl ReasonConstants {
    pub fn token() -> OwnerToken {
        OwnerToken::of::<Self>()
    }

    pub fn try_get_by_name(name: &str) -> Option<&'static ConstantEntry<Reason>> {
        ConstantLookup::try_get_by_name(&Self::token(), name)
    }

    pub fn try_get_by_id(id: Uuid) -> Option<&'static ConstantEntry<Reason>> {
        ConstantLookup::try_get_by_id(&Self::token(), id)
    }

    /// Name first, then identifier text.
    pub fn try_get_by_any(value: &str) -> Option<&'static ConstantEntry<Reason>> {
        ConstantLookup::try_get_by_any(&Self::token(), value)
    }

    pub fn all_entities() -> &'static [ConstantEntry<Reason>] {
        ConstantLookup::all_entities(&Self::token())
    }

    pub fn all_translations() -> Vec<TranslationEntry> {
        ConstantLookup::all_translations(&Self::token())
    }
}

impl ConstantSource for ReasonConstants {
    type Entity = Reason;
    const FAMILY: &'static str = "Reason";

    fn declare() -> Result<Vec<ConstantEntry<Reason>>, CatalogError> {
        [
            (
                "0195efb8-7c80-786d-89a9-100c117fc2ff",
                "Assignment",
                "Connection originates from an Assignment",
            ),
            (
                "0195efb8-7c80-76e8-8c8a-25a6e23a4379",
                "Delegation",
                "Connection originates from a Delegation",
            ),
            (
                "0195efb8-7c80-75d5-b825-8e0ce046d30d",
                "Hierarchy",
                "Connection originates from a parent/child hierarchy",
            ),
            (
                "0195efb8-7c80-7d0e-82fd-c3cba387b9a8",
                "Mapped",
                "Connection originates from a RoleMap",
            ),
            (
                "0195efb8-7c80-7aaa-9a1a-57c5660b0938",
                "KeyRole",
                "Connection originates from a role with isKeyRole flag",
            ),
            (
                "0195efb8-7c80-7641-8634-930d83b883bc",
                "HierarchyKeyRole",
                "Connection originates from a key role with isKeyRole flag and parent/child hierarchy",
            ),
        ]
        .into_iter()
        .map(|(id, name, description)| {
            ConstantEntry::new(id, |id| Reason {
                id,
                name: name.to_string(),
                description: description.to_string(),
            })
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_get_by_any_name_or_id() {
        let by_name = ReasonConstants::try_get_by_any("keyrole").expect("Should find by name");
        let by_id = ReasonConstants::try_get_by_any("0195efb8-7c80-7aaa-9a1a-57c5660b0938")
            .expect("Should find by id");

        assert!(std::ptr::eq(by_name, by_id));
        assert!(ReasonConstants::try_get_by_any("not-a-guid-and-not-a-known-name").is_none());
    }

    #[test]
    fn test_reasons_have_no_translations() {
        assert_eq!(ReasonConstants::all_entities().len(), 6);
        assert!(ReasonConstants::all_translations().is_empty());
    }

    #[test]
    fn test_cache_built_once() {
        ReasonConstants::try_get_by_name("Delegation");
        ReasonConstants::try_get_by_name("Delegation");
        assert_eq!(ConstantLookup::build_count(&ReasonConstants::token()), 1);
    }
}
