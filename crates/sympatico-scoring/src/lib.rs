//! Compatibility scoring for Sympatico.
//!
//! This crate turns two sets of virtue scores into a structured verdict:
//! - The verdict engine (`calculate_verdict`, `calculate_virtue_compatibility`)
//! - The match aggregator (`calculate_match_compatibility`)
//! - Penalty weights (`ScoringWeights`)
//! - Summary text layered over an aggregate result
//!
//! # Architecture
//!
//! Every function is pure over immutable inputs and the static registry.
//! Nothing is cached; results are rebuilt from scratch on every call and
//! owned by the caller.

pub mod aggregate;
pub mod summary;
pub mod verdict;
pub mod weights;

// ============================================================================
// Verdict Engine
// ============================================================================

pub use verdict::{
    calculate_verdict, calculate_virtue_compatibility, danger_from, sympatico_from,
    VirtueCompatibility,
};

// ============================================================================
// Match Aggregation
// ============================================================================

pub use aggregate::{
    best_score_with_dangers, calculate_match_compatibility, calculate_match_compatibility_with,
    MatchVirtueCompatibility, RealmScores, DANGER_CEILING, SEVERAL_DANGERS,
};
pub use weights::ScoringWeights;

// ============================================================================
// Summaries
// ============================================================================

pub use summary::{generate_compatibility_summary, summary_tone, SummaryTone};
