//! Token-keyed family registry.
//!
//! Facades that do not implement [`ConstantFamily`](crate::constants::ConstantFamily)
//! hand an [`OwnerToken`] to [`ConstantLookup`] on every call. The lookup keeps a
//! process-wide cache with one once-only slot per owner type; slots are leaked
//! so the indices they hold live for the rest of the process.

use crate::constants::{ConstantEntry, ConstantSource, Entity, FamilyIndex};
use crate::error::CatalogError;
use crate::i18n::{Language, TranslationBundle, TranslationEntry};
use crate::seed::FamilyExport;
use std::any::{type_name, Any, TypeId};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{OnceLock, PoisonError, RwLock};
use tracing::{error, info, warn};
use uuid::Uuid;

type ErasedIndex = Box<dyn Any + Send + Sync>;

/// Runtime reference to a constant owner.
///
/// Carries the owner's `TypeId` plus type-erased entry points into its
/// declaration, so code holding only a token can load, scan and export the
/// family.
#[derive(Clone, Copy)]
pub struct OwnerToken {
    type_id: TypeId,
    owner: &'static str,
    family: &'static str,
    kind: &'static str,
    load: fn() -> Result<ErasedIndex, CatalogError>,
    declared: fn() -> Result<Vec<DeclaredEntry>, CatalogError>,
    translations: fn() -> Result<Vec<TranslationEntry>, CatalogError>,
    translations_for: fn(Uuid, Language) -> Result<Option<BTreeMap<String, String>>, CatalogError>,
    export: fn() -> Result<FamilyExport, CatalogError>,
}

impl OwnerToken {
    pub fn of<O: ConstantSource>() -> Self {
        Self {
            type_id: TypeId::of::<O>(),
            owner: type_name::<O>(),
            family: O::FAMILY,
            kind: <O::Entity as Entity>::KIND,
            load: load_index::<O>,
            declared: declared_entries::<O>,
            translations: cached_translations::<O>,
            translations_for: cached_translations_for::<O>,
            export: cached_export::<O>,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Fully qualified owner type name.
    pub fn owner(&self) -> &'static str {
        self.owner
    }

    pub fn family(&self) -> &'static str {
        self.family
    }

    /// Entity kind of the family's payloads.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Run the owner's declaration without touching any cache.
    pub fn declared(&self) -> Result<Vec<DeclaredEntry>, CatalogError> {
        (self.declared)()
    }

    /// Flat translation rows through the token cache.
    pub fn translations(&self) -> Result<Vec<TranslationEntry>, CatalogError> {
        (self.translations)()
    }

    pub fn translations_for(
        &self,
        id: Uuid,
        language: Language,
    ) -> Result<Option<BTreeMap<String, String>>, CatalogError> {
        (self.translations_for)(id, language)
    }

    /// Entity and translation rows through the token cache.
    pub fn export(&self) -> Result<FamilyExport, CatalogError> {
        (self.export)()
    }
}

impl PartialEq for OwnerToken {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for OwnerToken {}

impl fmt::Debug for OwnerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnerToken")
            .field("owner", &self.owner)
            .field("family", &self.family)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Type-erased view of one declared entry, as scanned by the catalog guard.
#[derive(Debug, Clone)]
pub struct DeclaredEntry {
    pub family: &'static str,
    pub kind: &'static str,
    pub id: Uuid,
    pub name: String,
    pub english: Option<TranslationBundle>,
    pub nynorsk: Option<TranslationBundle>,
}

impl DeclaredEntry {
    fn of<E: Entity>(family: &'static str, entry: &ConstantEntry<E>) -> Self {
        Self {
            family,
            kind: E::KIND,
            id: entry.id(),
            name: entry.name().to_string(),
            english: entry.english().cloned(),
            nynorsk: entry.nynorsk().cloned(),
        }
    }
}

fn load_index<O: ConstantSource>() -> Result<ErasedIndex, CatalogError> {
    let index = FamilyIndex::build(O::FAMILY, O::declare()?)?;
    Ok(Box::new(index))
}

fn declared_entries<O: ConstantSource>() -> Result<Vec<DeclaredEntry>, CatalogError> {
    Ok(O::declare()?
        .iter()
        .map(|entry| DeclaredEntry::of(O::FAMILY, entry))
        .collect())
}

fn cached_translations<O: ConstantSource>() -> Result<Vec<TranslationEntry>, CatalogError> {
    let index = ConstantLookup::try_index::<O::Entity>(&OwnerToken::of::<O>())?;
    Ok(index.all_translations())
}

fn cached_translations_for<O: ConstantSource>(
    id: Uuid,
    language: Language,
) -> Result<Option<BTreeMap<String, String>>, CatalogError> {
    let index = ConstantLookup::try_index::<O::Entity>(&OwnerToken::of::<O>())?;
    Ok(index.translations_for(id, language))
}

fn cached_export<O: ConstantSource>() -> Result<FamilyExport, CatalogError> {
    let index = ConstantLookup::try_index::<O::Entity>(&OwnerToken::of::<O>())?;
    FamilyExport::from_index(index)
}

struct Slot {
    cell: OnceLock<Result<ErasedIndex, CatalogError>>,
    builds: AtomicUsize,
}

static SLOTS: OnceLock<RwLock<HashMap<TypeId, &'static Slot>>> = OnceLock::new();

fn slot_for(token: &OwnerToken) -> &'static Slot {
    let slots = SLOTS.get_or_init(|| RwLock::new(HashMap::new()));

    if let Some(slot) = slots
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&token.type_id)
    {
        return *slot;
    }

    let mut slots = slots.write().unwrap_or_else(PoisonError::into_inner);
    *slots.entry(token.type_id).or_insert_with(|| {
        let slot: &'static Slot = Box::leak(Box::new(Slot {
            cell: OnceLock::new(),
            builds: AtomicUsize::new(0),
        }));
        slot
    })
}

/// Lookups keyed by an owner token.
///
/// Lookups on an owner whose declaration fails panic with the load error, the
/// same as the typed registry. Asking for a payload type the owner does not
/// declare is a miss.
pub struct ConstantLookup;

impl ConstantLookup {
    /// Load (once) and return the owner's index.
    pub fn try_index<E: Entity>(token: &OwnerToken) -> Result<&'static FamilyIndex<E>, CatalogError> {
        let slot = slot_for(token);
        let loaded = slot.cell.get_or_init(|| {
            slot.builds.fetch_add(1, Ordering::SeqCst);
            let built = (token.load)();
            match &built {
                Ok(_) => info!("Cached constant family {} for {}", token.family, token.owner),
                Err(e) => error!("Failed to load constant family {}: {}", token.family, e),
            }
            built
        });

        let index = loaded.as_ref().map_err(Clone::clone)?;
        (**index)
            .downcast_ref::<FamilyIndex<E>>()
            .ok_or(CatalogError::EntityMismatch {
                owner: token.owner,
                kind: token.kind,
                requested: E::KIND,
            })
    }

    fn index<E: Entity>(token: &OwnerToken) -> Option<&'static FamilyIndex<E>> {
        match Self::try_index::<E>(token) {
            Ok(index) => Some(index),
            Err(e @ CatalogError::EntityMismatch { .. }) => {
                warn!("{}", e);
                None
            }
            Err(e) => panic!("constant family {} failed to load: {}", token.family, e),
        }
    }

    pub fn try_get_by_name<E: Entity>(token: &OwnerToken, name: &str) -> Option<&'static ConstantEntry<E>> {
        Self::index::<E>(token)?.try_get_by_name(name)
    }

    pub fn try_get_by_id<E: Entity>(token: &OwnerToken, id: Uuid) -> Option<&'static ConstantEntry<E>> {
        Self::index::<E>(token)?.try_get_by_id(id)
    }

    pub fn try_get_by_urn<E: Entity>(token: &OwnerToken, urn: &str) -> Option<&'static ConstantEntry<E>> {
        Self::index::<E>(token)?.try_get_by_urn(urn)
    }

    pub fn try_get_by_code<E: Entity>(token: &OwnerToken, code: &str) -> Option<&'static ConstantEntry<E>> {
        Self::index::<E>(token)?.try_get_by_code(code)
    }

    /// Name first, then `value` parsed as an identifier.
    pub fn try_get_by_any<E: Entity>(token: &OwnerToken, value: &str) -> Option<&'static ConstantEntry<E>> {
        Self::index::<E>(token)?.try_get_by_any(value)
    }

    pub fn all_entities<E: Entity>(token: &OwnerToken) -> &'static [ConstantEntry<E>] {
        Self::index::<E>(token)
            .map(FamilyIndex::all_entities)
            .unwrap_or_default()
    }

    /// Flat translation rows of the owner's family.
    ///
    /// # Panics
    ///
    /// If the owner's declaration is invalid.
    pub fn all_translations(token: &OwnerToken) -> Vec<TranslationEntry> {
        match token.translations() {
            Ok(rows) => rows,
            Err(e) => panic!("constant family {} failed to load: {}", token.family, e),
        }
    }

    /// # Panics
    ///
    /// If the owner's declaration is invalid.
    pub fn translations_for(
        token: &OwnerToken,
        id: Uuid,
        language: Language,
    ) -> Option<BTreeMap<String, String>> {
        match token.translations_for(id, language) {
            Ok(fields) => fields,
            Err(e) => panic!("constant family {} failed to load: {}", token.family, e),
        }
    }

    /// Number of times the owner's index has been built (0 or 1).
    pub fn build_count(token: &OwnerToken) -> usize {
        slot_for(token).builds.load(Ordering::SeqCst)
    }
}
