//! Payload records carried by the built-in constant families.
//!
//! Name and description text is written in Norwegian Bokmål, the base
//! language; other languages live in the entry's translation bundles.

use crate::constants::Entity;
use serde::Serialize;
use uuid::Uuid;

/// Category of a data provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderType {
    pub id: Uuid,
    pub name: String,
}

impl Entity for ProviderType {
    const KIND: &'static str = "ProviderType";

    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Source system that owns a set of roles, packages or entity types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Provider {
    pub id: Uuid,
    pub name: String,

    /// Short system code (e.g., "sys-altinn3")
    pub code: String,

    /// Identifier of the provider in an external registry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<String>,

    pub type_id: Uuid,
}

impl Entity for Provider {
    const KIND: &'static str = "Provider";

    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn code(&self) -> Option<&str> {
        Some(&self.code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityType {
    pub id: Uuid,
    pub name: String,
    pub provider_id: Uuid,
}

impl Entity for EntityType {
    const KIND: &'static str = "EntityType";

    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Top-level grouping of authorization areas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaGroup {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub entity_type_id: Uuid,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub urn: Option<String>,
}

impl Entity for AreaGroup {
    const KIND: &'static str = "AreaGroup";

    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn urn(&self) -> Option<&str> {
        self.urn.as_deref()
    }
}

/// Authorization area that access packages belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub icon_url: String,
    pub group_id: Uuid,

    /// e.g., "accesspackage:area:personale"
    pub urn: String,
}

impl Entity for Area {
    const KIND: &'static str = "Area";

    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn urn(&self) -> Option<&str> {
        Some(&self.urn)
    }
}

/// Lifecycle state of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestStatus {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

impl Entity for RequestStatus {
    const KIND: &'static str = "RequestStatus";

    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Why a party holds a connection to another party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reason {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

impl Entity for Reason {
    const KIND: &'static str = "Reason";

    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Internal actor recorded as the performer of automated changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemEntity {
    pub id: Uuid,
    pub name: String,

    /// Stable external reference (e.g., "sys-static-data-ingest")
    pub ref_id: String,

    pub type_id: Uuid,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<Uuid>,
}

impl Entity for SystemEntity {
    const KIND: &'static str = "Entity";

    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn code(&self) -> Option<&str> {
        Some(&self.ref_id)
    }
}
