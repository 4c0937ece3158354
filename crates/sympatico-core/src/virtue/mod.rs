//! The virtue taxonomy: eleven fixed personality dimensions.
//!
//! Every dimension is scored 0–100 for a person and carries a tolerance
//! policy ([`DeltaCategory`]) deciding how large a gap between two people
//! can be before it becomes friction or danger.

mod definition;
mod registry;


pub use definition::{DeltaCategory, VirtueDefinition};
pub use registry::{critical_virtues, get_virtue_by_id, get_virtues_by_realm, VIRTUES, VIRTUE_COUNT};
