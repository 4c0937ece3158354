//! Sympatico Core - Core types and the virtue registry
//!
//! This crate provides the fundamental abstractions for Sympatico:
//! - The static registry of the eleven virtue dimensions
//! - Realm metadata for grouping virtues
//! - Verdict and delta-category types for tolerance policies
//! - Profile and score types consumed by the scoring engine

pub mod error;
pub mod profile;
pub mod realm;
pub mod verdict;
pub mod virtue;

pub use error::SympaticoError;
pub use profile::{
    clamp_score, RealmSummaries, UserVirtueProfile, VirtueScore, MAX_SCORE, MIN_SCORE, NEUTRAL_SCORE,
};
pub use realm::{get_realm_config, realm_config, Realm, RealmConfig, REALMS};
pub use verdict::Verdict;
pub use virtue::{
    critical_virtues, get_virtue_by_id, get_virtues_by_realm, DeltaCategory, VirtueDefinition,
    VIRTUES, VIRTUE_COUNT,
};
