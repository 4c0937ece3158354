//! Configured entry point for match scoring.

use sympatico_config::{ConfigError, ScoringConfig};
use sympatico_core::{UserVirtueProfile, VirtueScore};
use sympatico_scoring::{calculate_match_compatibility_with, MatchVirtueCompatibility};
use tracing::debug;

/// Scores a match with weights taken from a [`ScoringConfig`].
///
/// The config is validated first, so a hand-built config that breaks the
/// penalty ordering is rejected instead of producing misleading scores.
///
/// With the `console` feature enabled, the first call also prints the
/// console banner and installs the global `tracing` subscriber through
/// `sympatico_console::init`. Later calls, and builds without the feature,
/// have no side effects.
///
/// # Example
///
/// ```
/// use sympatico::{calculate_match_compatibility_with_config, ScoringConfig, UserVirtueProfile};
///
/// let config = ScoringConfig::new().with_danger_penalty(20.0);
/// let result =
///     calculate_match_compatibility_with_config(&UserVirtueProfile::new(), &[], &config).unwrap();
/// // Neutral scores on both sides leave the three complementary virtues in friction.
/// assert_eq!(result.friction_count, 3);
/// assert_eq!(result.overall_score, 85.0);
///
/// let broken = ScoringConfig::new().with_danger_penalty(1.0);
/// assert!(calculate_match_compatibility_with_config(&UserVirtueProfile::new(), &[], &broken).is_err());
/// ```
pub fn calculate_match_compatibility_with_config(
    user_profile: &UserVirtueProfile,
    match_scores: &[VirtueScore],
    config: &ScoringConfig,
) -> Result<MatchVirtueCompatibility, ConfigError> {
    config.validate()?;

    #[cfg(feature = "console")]
    sympatico_console::init();

    let weights = config.weights();
    debug!(
        event = "weights_configured",
        friction_penalty = weights.friction_penalty,
        danger_penalty = weights.danger_penalty,
        critical_multiplier = weights.critical_multiplier,
    );

    Ok(calculate_match_compatibility_with(
        user_profile,
        match_scores,
        &weights,
    ))
}
