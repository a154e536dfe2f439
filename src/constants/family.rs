//! Typed family registry.
//!
//! A facade implements [`ConstantSource`] to declare its entries and
//! [`ConstantFamily`] to get every lookup as a provided method backed by one
//! static [`FamilyRegistry`] slot.

use crate::constants::{ConstantEntry, Entity, FamilyIndex, IntoEntryId, OwnerToken};
use crate::error::CatalogError;
use crate::i18n::{Language, TranslationEntry};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;
use tracing::{error, info};
use uuid::Uuid;

/// Explicit declaration of one family's constants.
pub trait ConstantSource: 'static {
    type Entity: Entity;

    /// Family name used in logs, errors and export file names.
    const FAMILY: &'static str;

    /// Every entry of the family in declaration order.
    fn declare() -> Result<Vec<ConstantEntry<Self::Entity>>, CatalogError>;
}

/// Once-only storage for a family's index.
///
/// Declared as a `static` by each typed facade:
///
/// ```rust
/// use constant_catalog::constants::FamilyRegistry;
/// use constant_catalog::models::ProviderType;
///
/// static REGISTRY: FamilyRegistry<ProviderType> = FamilyRegistry::new();
/// assert_eq!(REGISTRY.build_count(), 0);
/// ```
pub struct FamilyRegistry<E> {
    cell: OnceLock<Result<FamilyIndex<E>, CatalogError>>,
    builds: AtomicUsize,
}

impl<E: Entity> FamilyRegistry<E> {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
            builds: AtomicUsize::new(0),
        }
    }

    /// Build the index on first call, return the memoized outcome afterwards.
    ///
    /// Concurrent first callers block until the single build completes.
    pub fn load(
        &self,
        family: &'static str,
        declare: fn() -> Result<Vec<ConstantEntry<E>>, CatalogError>,
    ) -> Result<&FamilyIndex<E>, CatalogError> {
        self.cell
            .get_or_init(|| {
                self.builds.fetch_add(1, Ordering::SeqCst);
                let built = declare().and_then(|entries| FamilyIndex::build(family, entries));
                match &built {
                    Ok(index) => info!("Loaded {} constants for family {}", index.len(), family),
                    Err(e) => error!("Failed to load constant family {}: {}", family, e),
                }
                built
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Number of times the index has been built (0 or 1).
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }
}

impl<E: Entity> Default for FamilyRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Typed lookups for a facade with a static registry slot.
///
/// Lookups on a family whose declaration fails panic with the load error;
/// use [`ConstantFamily::try_index`] to observe the failure instead.
pub trait ConstantFamily: ConstantSource + Sized {
    fn registry() -> &'static FamilyRegistry<Self::Entity>;

    fn try_index() -> Result<&'static FamilyIndex<Self::Entity>, CatalogError> {
        Self::registry().load(Self::FAMILY, Self::declare)
    }

    /// # Panics
    ///
    /// If the family's declaration is invalid.
    fn index() -> &'static FamilyIndex<Self::Entity> {
        match Self::try_index() {
            Ok(index) => index,
            Err(e) => panic!("constant family {} failed to load: {}", Self::FAMILY, e),
        }
    }

    fn try_get_by_name(name: &str) -> Option<&'static ConstantEntry<Self::Entity>> {
        Self::index().try_get_by_name(name)
    }

    fn try_get_by_id(id: Uuid) -> Option<&'static ConstantEntry<Self::Entity>> {
        Self::index().try_get_by_id(id)
    }

    fn try_get_by_urn(urn: &str) -> Option<&'static ConstantEntry<Self::Entity>> {
        Self::index().try_get_by_urn(urn)
    }

    fn try_get_by_code(code: &str) -> Option<&'static ConstantEntry<Self::Entity>> {
        Self::index().try_get_by_code(code)
    }

    fn try_get_by_any(value: &str) -> Option<&'static ConstantEntry<Self::Entity>> {
        Self::index().try_get_by_any(value)
    }

    fn all_entities() -> &'static [ConstantEntry<Self::Entity>] {
        Self::index().all_entities()
    }

    fn all_translations() -> Vec<TranslationEntry> {
        Self::index().all_translations()
    }

    fn translations_for(id: Uuid, language: Language) -> Option<BTreeMap<String, String>> {
        Self::index().translations_for(id, language)
    }

    /// A declared entry by identifier.
    ///
    /// # Panics
    ///
    /// If `id` is malformed or not declared by this family.
    fn require(id: impl IntoEntryId) -> &'static ConstantEntry<Self::Entity> {
        let id = match id.into_entry_id() {
            Ok(id) => id,
            Err(e) => panic!("{}: {}", Self::FAMILY, e),
        };
        match Self::try_get_by_id(id) {
            Some(entry) => entry,
            None => panic!("constant {} is not declared by family {}", id, Self::FAMILY),
        }
    }

    /// Runtime owner reference for the token registry and the catalog.
    fn token() -> OwnerToken {
        OwnerToken::of::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::TranslationFields;
    use crate::models::ProviderType;
    use std::thread;

    static DECLARE_CALLS: AtomicUsize = AtomicUsize::new(0);

    struct CountingFamily;

    impl ConstantSource for CountingFamily {
        type Entity = ProviderType;
        const FAMILY: &'static str = "CountingFamily";

        fn declare() -> Result<Vec<ConstantEntry<ProviderType>>, CatalogError> {
            DECLARE_CALLS.fetch_add(1, Ordering::SeqCst);
            Ok(vec![
                ConstantEntry::new("6f1b3a4e-2c7d-4e8f-9a0b-1c2d3e4f5a6b", |id| ProviderType {
                    id,
                    name: "Counted".to_string(),
                })?
                .with_english(TranslationFields::new([("Name", "Counted")]))
                .with_nynorsk(TranslationFields::new([("Name", "Talt")])),
            ])
        }
    }

    impl ConstantFamily for CountingFamily {
        fn registry() -> &'static FamilyRegistry<ProviderType> {
            static REGISTRY: FamilyRegistry<ProviderType> = FamilyRegistry::new();
            &REGISTRY
        }
    }

    struct BrokenFamily;

    impl ConstantSource for BrokenFamily {
        type Entity = ProviderType;
        const FAMILY: &'static str = "BrokenFamily";

        fn declare() -> Result<Vec<ConstantEntry<ProviderType>>, CatalogError> {
            Ok(vec![ConstantEntry::new("not-a-guid", |id| ProviderType {
                id,
                name: "Broken".to_string(),
            })?])
        }
    }

    impl ConstantFamily for BrokenFamily {
        fn registry() -> &'static FamilyRegistry<ProviderType> {
            static REGISTRY: FamilyRegistry<ProviderType> = FamilyRegistry::new();
            &REGISTRY
        }
    }

    // ==================== Memoization Tests ====================

    #[test]
    fn test_index_built_once_under_concurrent_first_access() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| CountingFamily::try_get_by_name("counted").map(|e| e.id())))
            .collect();

        let ids: Vec<_> = handles
            .into_iter()
            .map(|h| h.join().expect("Thread should not panic"))
            .collect();

        assert!(ids.iter().all(|id| id.is_some() && *id == ids[0]));
        assert_eq!(CountingFamily::registry().build_count(), 1);
        assert_eq!(DECLARE_CALLS.load(Ordering::SeqCst), 1);

        // Repeated lookups return the same entry without rebuilding
        let first = CountingFamily::try_get_by_name("COUNTED").expect("Should find");
        let second = CountingFamily::try_get_by_name("COUNTED").expect("Should find");
        assert!(std::ptr::eq(first, second));
        assert_eq!(DECLARE_CALLS.load(Ordering::SeqCst), 1);
    }

    // ==================== Accessor Tests ====================

    #[test]
    fn test_require_returns_declared_entry() {
        let entry = CountingFamily::require("6f1b3a4e-2c7d-4e8f-9a0b-1c2d3e4f5a6b");
        assert_eq!(entry.name(), "Counted");
        assert_eq!(CountingFamily::all_translations().len(), 2);
    }

    #[test]
    #[should_panic(expected = "not declared by family CountingFamily")]
    fn test_require_unknown_id_panics() {
        CountingFamily::require(Uuid::nil());
    }

    // ==================== Load Failure Tests ====================

    #[test]
    fn test_broken_declaration_is_reported_by_try_index() {
        let result = BrokenFamily::try_index();
        assert!(matches!(result, Err(CatalogError::InvalidId { .. })));

        // Failure is memoized too
        assert!(BrokenFamily::try_index().is_err());
        assert_eq!(BrokenFamily::registry().build_count(), 1);
    }

    #[test]
    #[should_panic(expected = "constant family BrokenFamily failed to load")]
    fn test_broken_declaration_panics_on_lookup() {
        BrokenFamily::try_get_by_name("Broken");
    }
}
