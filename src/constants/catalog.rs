//! Process-wide registry of constant families.
//!
//! Families opt in at startup; the catalog guard, the seed export and
//! kind-based translation lookups iterate what was registered. Registration is
//! append-only and idempotent per owner type.

use crate::constants::{ConstantSource, OwnerToken};
use crate::error::CatalogError;
use crate::i18n::Language;
use std::collections::BTreeMap;
use std::sync::{Mutex, OnceLock, PoisonError};
use tracing::debug;
use uuid::Uuid;

static FAMILIES: OnceLock<Mutex<Vec<OwnerToken>>> = OnceLock::new();

fn registry() -> &'static Mutex<Vec<OwnerToken>> {
    FAMILIES.get_or_init(|| Mutex::new(Vec::new()))
}

pub struct Catalog;

impl Catalog {
    /// Register an owner. Returns `false` if it was already registered.
    pub fn register(token: OwnerToken) -> bool {
        let mut registered = registry().lock().unwrap_or_else(PoisonError::into_inner);

        if registered.contains(&token) {
            return false;
        }

        debug!("Registered constant family {} ({})", token.family(), token.owner());
        registered.push(token);
        true
    }

    pub fn register_family<O: ConstantSource>() -> bool {
        Self::register(OwnerToken::of::<O>())
    }

    /// Snapshot of registered owners in registration order.
    pub fn families() -> Vec<OwnerToken> {
        registry()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Owner of the family whose entity kind is `kind`.
    ///
    /// Matching ignores ASCII case and a trailing `Dto`, so `"RoleDto"` and
    /// `"role"` both resolve the `Role` family.
    pub fn find_by_kind(kind: &str) -> Option<OwnerToken> {
        let kind = kind.trim();
        let kind = match kind.len().checked_sub(3) {
            Some(split) if kind.is_char_boundary(split) && kind[split..].eq_ignore_ascii_case("dto") => {
                &kind[..split]
            }
            _ => kind,
        };

        Self::families()
            .into_iter()
            .find(|token| token.kind().eq_ignore_ascii_case(kind))
    }

    /// Translated fields of one constant, resolved by entity kind.
    ///
    /// `Ok(None)` for the base language, unknown kinds, unknown ids and
    /// untranslated entries.
    pub fn translations_for(
        kind: &str,
        id: Uuid,
        language: Language,
    ) -> Result<Option<BTreeMap<String, String>>, CatalogError> {
        if language.is_base() {
            return Ok(None);
        }

        match Self::find_by_kind(kind) {
            Some(token) => token.translations_for(id, language),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ConstantEntry;
    use crate::i18n::TranslationFields;
    use crate::models::RequestStatus;

    const PENDING: &str = "7d3e1f20-5a4b-4c6d-8e9f-0a1b2c3d4e5f";

    // Registered globally; its kind is unique to this module.
    struct CatalogFixture;

    #[derive(Debug, Clone, serde::Serialize)]
    struct FixtureStatus(RequestStatus);

    impl crate::constants::Entity for FixtureStatus {
        const KIND: &'static str = "FixtureStatus";

        fn id(&self) -> Uuid {
            self.0.id
        }

        fn name(&self) -> &str {
            &self.0.name
        }
    }

    impl ConstantSource for CatalogFixture {
        type Entity = FixtureStatus;
        const FAMILY: &'static str = "CatalogFixture";

        fn declare() -> Result<Vec<ConstantEntry<FixtureStatus>>, CatalogError> {
            Ok(vec![ConstantEntry::new(PENDING, |id| {
                FixtureStatus(RequestStatus {
                    id,
                    name: "Venter".to_string(),
                    description: String::new(),
                })
            })?
            .with_english(TranslationFields::new([("Name", "Pending")]))
            .with_nynorsk(TranslationFields::new([("Name", "Ventar")]))])
        }
    }

    // ==================== Registration Tests ====================

    #[test]
    fn test_register_is_idempotent() {
        Catalog::register_family::<CatalogFixture>();
        assert!(!Catalog::register_family::<CatalogFixture>());

        let count = Catalog::families()
            .iter()
            .filter(|t| t.family() == "CatalogFixture")
            .count();
        assert_eq!(count, 1);
    }

    // ==================== Kind Resolution Tests ====================

    #[test]
    fn test_find_by_kind_accepts_dto_suffix_and_case() {
        Catalog::register_family::<CatalogFixture>();

        for kind in ["FixtureStatus", "fixturestatus", "FixtureStatusDto", "FIXTURESTATUSDTO"] {
            let token = Catalog::find_by_kind(kind).expect("Should resolve");
            assert_eq!(token.family(), "CatalogFixture");
        }
        assert!(Catalog::find_by_kind("Dto").is_none());
        assert!(Catalog::find_by_kind("FixtureStatusDtoDto").is_none());
    }

    #[test]
    fn test_translations_for_by_kind() {
        Catalog::register_family::<CatalogFixture>();
        let id = Uuid::parse_str(PENDING).unwrap();

        let en = Catalog::translations_for("FixtureStatusDto", id, Language::ENGLISH)
            .expect("Should load")
            .expect("Should translate");
        assert_eq!(en["Name"], "Pending");

        assert_eq!(Catalog::translations_for("FixtureStatus", id, Language::BOKMAL), Ok(None));
        assert_eq!(Catalog::translations_for("Unknown", id, Language::ENGLISH), Ok(None));
        assert_eq!(
            Catalog::translations_for("FixtureStatus", Uuid::nil(), Language::NYNORSK),
            Ok(None)
        );
    }
}
