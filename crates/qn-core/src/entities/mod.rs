//! Entity structs for Quest Nexus domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation of persisted records.

mod user;

pub use user::{User, name_from_email};
