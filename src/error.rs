use thiserror::Error;
use uuid::Uuid;

/// Errors raised while declaring, indexing or verifying constants.
///
/// Lookup misses are never represented here; they are plain `None` results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// An identifier literal is not a valid UUID.
    #[error("invalid constant identifier '{value}': {source}")]
    InvalidId {
        value: String,
        #[source]
        source: uuid::Error,
    },

    /// The payload built for an entry reports a different identifier than the entry.
    #[error("{kind} payload was built with id {actual}, expected {expected}")]
    IdMismatch {
        kind: &'static str,
        expected: Uuid,
        actual: Uuid,
    },

    #[error("family {family} declares identifier {id} more than once")]
    DuplicateId { family: &'static str, id: Uuid },

    #[error("family {family} declares name '{name}' more than once (case-insensitive)")]
    DuplicateName { family: &'static str, name: String },

    /// A secondary key (urn, code) collides inside one family.
    #[error("family {family} declares {key} '{value}' more than once")]
    DuplicateKey {
        family: &'static str,
        key: &'static str,
        value: String,
    },

    /// A token lookup asked for a payload type the owner does not declare.
    #[error("owner {owner} declares {kind} constants, not {requested}")]
    EntityMismatch {
        owner: &'static str,
        kind: &'static str,
        requested: &'static str,
    },

    /// Two distinct owners use the same family name.
    #[error("family name {family} is used by both {first} and {second}")]
    FamilyConflict {
        family: &'static str,
        first: &'static str,
        second: &'static str,
    },

    #[error("unknown language code: '{0}'")]
    UnknownLanguage(String),

    #[error("failed to serialize {family} entry {id}: {message}")]
    Serialize {
        family: &'static str,
        id: Uuid,
        message: String,
    },

    /// Duplicate identifiers or broken declarations found by the catalog guard.
    #[error("catalog integrity check failed with {violations} violation(s):\n{details}")]
    Integrity { violations: usize, details: String },
}
