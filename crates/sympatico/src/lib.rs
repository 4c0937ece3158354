//! Sympatico - Virtue Compatibility Scoring in Rust
//!
//! Score a user against a prospective match across eleven virtues and get
//! back per-virtue verdicts, realm scores and one overall number.
//!
//! # Example
//!
//! ```rust
//! use sympatico::prelude::*;
//!
//! let user = UserVirtueProfile::new()
//!     .with_score("space", 10.0)
//!     .with_score("curiosity", 40.0);
//! let scores = vec![
//!     VirtueScore::new("space", 80.0),
//!     VirtueScore::new("curiosity", 65.0),
//! ];
//!
//! let result = calculate_match_compatibility(&user, &scores);
//! assert_eq!(result.get("space").unwrap().verdict, Verdict::Danger);
//! assert_eq!(result.get("curiosity").unwrap().verdict, Verdict::Sympatico);
//! assert!(result.has_critical_issues());
//! ```

// Registry and domain types
pub use sympatico_core::{
    clamp_score, critical_virtues, get_realm_config, get_virtue_by_id, get_virtues_by_realm,
    realm_config, DeltaCategory, Realm, RealmConfig, RealmSummaries, SympaticoError,
    UserVirtueProfile, Verdict, VirtueDefinition, VirtueScore, MAX_SCORE, MIN_SCORE,
    NEUTRAL_SCORE, REALMS, VIRTUES, VIRTUE_COUNT,
};

// Verdict engine and aggregation
pub use sympatico_scoring::{
    best_score_with_dangers, calculate_match_compatibility, calculate_match_compatibility_with,
    calculate_verdict, calculate_virtue_compatibility, generate_compatibility_summary,
    summary_tone, MatchVirtueCompatibility, RealmScores, ScoringWeights, SummaryTone,
    VirtueCompatibility, DANGER_CEILING, SEVERAL_DANGERS,
};

// Configuration
pub use sympatico_config::{ConfigError, PenaltyConfig, ScoringConfig};

mod scoring;
pub use scoring::calculate_match_compatibility_with_config;

/// Colored console output for scoring events.
#[cfg(feature = "console")]
pub mod console {
    pub use sympatico_console::{init, CompatibilityConsoleLayer};
}

pub mod prelude {
    pub use super::{
        calculate_match_compatibility, calculate_match_compatibility_with_config,
        generate_compatibility_summary,
    };
    pub use super::{
        MatchVirtueCompatibility, Realm, ScoringConfig, UserVirtueProfile, Verdict,
        VirtueCompatibility, VirtueScore,
    };
}
