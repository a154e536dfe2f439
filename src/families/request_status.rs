use crate::constants::{ConstantEntry, ConstantFamily, ConstantSource, FamilyRegistry};
use crate::error::CatalogError;
use crate::i18n::TranslationFields;
use crate::models::RequestStatus;

/// Lifecycle states of a request.
pub struct RequestStatusConstants;

impl RequestStatusConstants {
    pub const ACCEPTED: &'static str = "0195efb8-7c80-7c6d-aec6-5eafa8154ca1";
    pub const REJECTED: &'static str = "0195efb8-7c80-761b-b950-e709c703b6b1";
    pub const OPEN: &'static str = "0195efb8-7c80-7239-8ee5-7156872b53d1";
    pub const CLOSED: &'static str = "0195efb8-7c80-7731-82a3-1f6b659ec848";

    pub fn accepted() -> &'static ConstantEntry<RequestStatus> {
        Self::require(Self::ACCEPTED)
    }

    pub fn rejected() -> &'static ConstantEntry<RequestStatus> {
        Self::require(Self::REJECTED)
    }

    pub fn open() -> &'static ConstantEntry<RequestStatus> {
        Self::require(Self::OPEN)
    }

    pub fn closed() -> &'static ConstantEntry<RequestStatus> {
        Self::require(Self::CLOSED)
    }
}

fn status(
    id: &str,
    name: &str,
    description: &str,
    en: [&str; 2],
    nn: [&str; 2],
) -> Result<ConstantEntry<RequestStatus>, CatalogError> {
    Ok(ConstantEntry::new(id, |id| RequestStatus {
        id,
        name: name.to_string(),
        description: description.to_string(),
    })?
    .with_english(TranslationFields::new([("Name", en[0]), ("Description", en[1])]))
    .with_nynorsk(TranslationFields::new([("Name", nn[0]), ("Description", nn[1])])))
}

impl ConstantSource for RequestStatusConstants {
    type Entity = RequestStatus;
    const FAMILY: &'static str = "RequestStatus";

    fn declare() -> Result<Vec<ConstantEntry<RequestStatus>>, CatalogError> {
        Ok(vec![
            status(
                Self::ACCEPTED,
                "Godkjent",
                "Forespørselen er godkjent",
                ["Accepted", "Request is accepted"],
                ["Godkjend", "Førespurnaden er godkjend"],
            )?,
            status(
                Self::REJECTED,
                "Avslått",
                "Forespørselen er avslått",
                ["Rejected", "Request is rejected"],
                ["Avslått", "Førespurnaden er avslått"],
            )?,
            status(
                Self::OPEN,
                "Åpen",
                "Forespørselen er åpen",
                ["Open", "Request is open"],
                ["Open", "Førespurnaden er open"],
            )?,
            status(
                Self::CLOSED,
                "Lukket",
                "Forespørselen er lukket",
                ["Closed", "Request is closed"],
                ["Lukka", "Førespurnaden er lukka"],
            )?,
        ])
    }
}

impl ConstantFamily for RequestStatusConstants {
    fn registry() -> &'static FamilyRegistry<RequestStatus> {
        static REGISTRY: FamilyRegistry<RequestStatus> = FamilyRegistry::new();
        &REGISTRY
    }
}
