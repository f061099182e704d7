//! Entity structs for dayplan domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip
//! and schema validation.

mod candidate;
mod routine;

pub use candidate::{DEFAULT_TITLE, TaskCandidate, default_time};
pub use routine::{NewRoutine, ROUTINE_TITLE_MAX};
