//! Card system: definitions, instances, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardType`: What a card does when resolved
//! - `CardDefinition`: Static card data (name, type, value, rarity)
//! - `CardInstance`: A uniquely identified, playable copy of a definition
//! - `InstanceIdGen`: Monotonic instance-id allocator, owned by the session
//! - `CardCatalog`: Card definition lookup

pub mod catalog;
pub mod definition;
pub mod instance;

pub use catalog::CardCatalog;
pub use definition::{CardDefinition, CardId, CardType, Rarity};
pub use instance::{CardInstance, InstanceId, InstanceIdGen};
