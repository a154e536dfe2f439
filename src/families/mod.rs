//! Built-in constant families.
//!
//! Typed facades implement `ConstantFamily`; `ReasonConstants` and
//! `SystemEntityConstants` go through the token registry instead.

mod area;
mod area_group;
mod entity_type;
mod provider;
mod provider_type;
mod reason;
mod request_status;
mod system_entity;

pub use area::AreaConstants;
pub use area_group::AreaGroupConstants;
pub use entity_type::EntityTypeConstants;
pub use provider::ProviderConstants;
pub use provider_type::ProviderTypeConstants;
pub use reason::ReasonConstants;
pub use request_status::RequestStatusConstants;
pub use system_entity::SystemEntityConstants;

use crate::constants::{Catalog, OwnerToken};
use tracing::debug;

/// Owner tokens of every built-in family, in registration order.
pub fn builtin() -> Vec<OwnerToken> {
    use crate::constants::ConstantFamily;

    vec![
        ProviderTypeConstants::token(),
        ProviderConstants::token(),
        EntityTypeConstants::token(),
        AreaGroupConstants::token(),
        AreaConstants::token(),
        RequestStatusConstants::token(),
        ReasonConstants::token(),
        SystemEntityConstants::token(),
    ]
}

/// Register the built-in families with the [`Catalog`]. Safe to call repeatedly.
pub fn register_builtin() {
    let added = builtin().into_iter().filter(|token| Catalog::register(*token)).count();
    debug!("Registered {} built-in constant families", added);
}
