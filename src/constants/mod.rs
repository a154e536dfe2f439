//! Constant declaration, indexing and integrity checking.
//!
//! # Architecture
//!
//! - `entity`: Capability every constant payload provides
//! - `entry`: One identifier, its payload and its translation bundles
//! - `index`: Name/id/urn/code indices over one family, built once
//! - `family`: Typed registry (`ConstantFamily`) backed by a static slot
//! - `lookup`: Token-keyed registry (`ConstantLookup`) with a per-owner cache
//! - `catalog`: Process-wide, append-only list of registered families
//! - `guard`: Cross-family duplicate identifier check
//! - `metrics`: Index build and lookup counters

mod catalog;
mod entity;
mod entry;
mod family;
mod guard;
mod index;
mod lookup;
mod metrics;

pub use catalog::Catalog;
pub use entity::{Entity, IntoEntryId};
pub use entry::ConstantEntry;
pub use family::{ConstantFamily, ConstantSource, FamilyRegistry};
pub use guard::{
    check_family_names, CatalogGuard, DuplicateGroup, DuplicateMember, IntegrityReport, UniquenessScope,
};
pub use index::FamilyIndex;
pub use lookup::{ConstantLookup, DeclaredEntry, OwnerToken};
pub use metrics::{CatalogMetrics, MetricsReport};
