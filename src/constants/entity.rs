use crate::error::CatalogError;
use serde::Serialize;
use uuid::Uuid;

/// Capability every constant payload provides.
///
/// The identifier is handed to the payload constructor by the owning
/// [`ConstantEntry`](crate::constants::ConstantEntry), so a payload never
/// exists without its permanent id.
pub trait Entity: Serialize + Send + Sync + 'static {
    /// Kind name stamped on translation rows (e.g., "ProviderType").
    const KIND: &'static str;

    fn id(&self) -> Uuid;

    fn name(&self) -> &str;

    fn urn(&self) -> Option<&str> {
        None
    }

    fn code(&self) -> Option<&str> {
        None
    }
}

/// Anything a constant identifier can be declared from: a `Uuid` or its
/// canonical text form.
pub trait IntoEntryId {
    fn into_entry_id(self) -> Result<Uuid, CatalogError>;
}

impl IntoEntryId for Uuid {
    fn into_entry_id(self) -> Result<Uuid, CatalogError> {
        Ok(self)
    }
}

impl IntoEntryId for &str {
    fn into_entry_id(self) -> Result<Uuid, CatalogError> {
        Uuid::parse_str(self).map_err(|source| CatalogError::InvalidId {
            value: self.to_string(),
            source,
        })
    }
}

impl IntoEntryId for &String {
    fn into_entry_id(self) -> Result<Uuid, CatalogError> {
        self.as_str().into_entry_id()
    }
}
