//! Penalty weights applied by the match aggregator.
//!
//! The defaults keep the aggregate invariants: a danger always costs more
//! than a friction, a critical danger costs more than an ordinary one, and
//! three dangers always pull the overall score below 50.

use sympatico_core::{Verdict, NEUTRAL_SCORE};

/// Default penalty for a friction verdict.
pub const DEFAULT_FRICTION_PENALTY: f64 = 5.0;

/// Default penalty for a danger verdict.
pub const DEFAULT_DANGER_PENALTY: f64 = 15.0;

/// Default multiplier applied to danger on a critical virtue.
pub const DEFAULT_CRITICAL_MULTIPLIER: f64 = 2.0;

/// Runtime weights for turning verdicts into score penalties.
///
/// Weights built by hand are not validated. Only the defaults are guaranteed
/// to keep the aggregate invariants; custom weights should be checked the way
/// configuration loading does, with
/// [`best_score_with_dangers`](crate::aggregate::best_score_with_dangers).
///
/// # Example
///
/// ```
/// use sympatico_core::Verdict;
/// use sympatico_scoring::ScoringWeights;
///
/// let weights = ScoringWeights::default();
/// assert_eq!(weights.penalty_for(Verdict::Sympatico, true), 0.0);
/// assert!(weights.penalty_for(Verdict::Danger, false) > weights.penalty_for(Verdict::Friction, false));
/// assert!(weights.penalty_for(Verdict::Danger, true) > weights.penalty_for(Verdict::Danger, false));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoringWeights {
    /// Points subtracted for each friction verdict.
    pub friction_penalty: f64,
    /// Points subtracted for each danger verdict.
    pub danger_penalty: f64,
    /// Factor applied to `danger_penalty` when the virtue is critical.
    pub critical_multiplier: f64,
    /// Score assumed for a virtue with no usable input.
    pub neutral_score: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            friction_penalty: DEFAULT_FRICTION_PENALTY,
            danger_penalty: DEFAULT_DANGER_PENALTY,
            critical_multiplier: DEFAULT_CRITICAL_MULTIPLIER,
            neutral_score: NEUTRAL_SCORE,
        }
    }
}

impl ScoringWeights {
    /// Creates the default weights.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_friction_penalty(mut self, penalty: f64) -> Self {
        self.friction_penalty = penalty;
        self
    }

    pub fn with_danger_penalty(mut self, penalty: f64) -> Self {
        self.danger_penalty = penalty;
        self
    }

    pub fn with_critical_multiplier(mut self, multiplier: f64) -> Self {
        self.critical_multiplier = multiplier;
        self
    }

    pub fn with_neutral_score(mut self, score: f64) -> Self {
        self.neutral_score = score;
        self
    }

    /// Returns the penalty a verdict costs on a virtue.
    pub fn penalty_for(&self, verdict: Verdict, critical: bool) -> f64 {
        match verdict {
            Verdict::Sympatico => 0.0,
            Verdict::Friction => self.friction_penalty,
            Verdict::Danger if critical => self.danger_penalty * self.critical_multiplier,
            Verdict::Danger => self.danger_penalty,
        }
    }
}
