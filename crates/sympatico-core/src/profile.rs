//! Score and profile types consumed by the scoring engine.

use chrono::{DateTime, Utc};

use crate::realm::Realm;

/// Neutral midpoint used whenever a score is missing or unusable.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Lowest score on a virtue spectrum.
pub const MIN_SCORE: f64 = 0.0;

/// Highest score on a virtue spectrum.
pub const MAX_SCORE: f64 = 100.0;

/// Normalizes a raw score into the 0–100 spectrum.
///
/// Out-of-range values are clamped; non-finite values fall back to
/// [`NEUTRAL_SCORE`].
///
/// # Example
///
/// ```
/// use sympatico_core::{clamp_score, NEUTRAL_SCORE};
///
/// assert_eq!(clamp_score(42.5), 42.5);
/// assert_eq!(clamp_score(140.0), 100.0);
/// assert_eq!(clamp_score(-3.0), 0.0);
/// assert_eq!(clamp_score(f64::NAN), NEUTRAL_SCORE);
/// ```
pub fn clamp_score(score: f64) -> f64 {
    if score.is_finite() {
        score.clamp(MIN_SCORE, MAX_SCORE)
    } else {
        NEUTRAL_SCORE
    }
}

/// One measurement of one person on one virtue.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VirtueScore {
    /// Registry id of the virtue. Unknown ids are tolerated and ignored.
    pub virtue_id: String,
    /// Score on the 0–100 spectrum.
    pub score: f64,
    /// Producer's confidence in the score (0.0–1.0).
    #[cfg_attr(feature = "serde", serde(default))]
    pub confidence: Option<f64>,
    /// Free-text justification from the producer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub evidence: Option<String>,
}

impl VirtueScore {
    /// Creates a score with no confidence or evidence attached.
    pub fn new(virtue_id: impl Into<String>, score: f64) -> Self {
        Self {
            virtue_id: virtue_id.into(),
            score,
            confidence: None,
            evidence: None,
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = Some(evidence.into());
        self
    }
}

/// Free-text summaries of a user, one per realm.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RealmSummaries {
    pub biological: Option<String>,
    pub emotional: Option<String>,
    pub cerebral: Option<String>,
}

impl RealmSummaries {
    /// Returns the summary for `realm`, if one was written.
    pub fn get(&self, realm: Realm) -> Option<&str> {
        match realm {
            Realm::Biological => self.biological.as_deref(),
            Realm::Emotional => self.emotional.as_deref(),
            Realm::Cerebral => self.cerebral.as_deref(),
        }
    }

    /// Sets the summary for `realm`.
    pub fn set(&mut self, realm: Realm, summary: impl Into<String>) {
        let slot = match realm {
            Realm::Biological => &mut self.biological,
            Realm::Emotional => &mut self.emotional,
            Realm::Cerebral => &mut self.cerebral,
        };
        *slot = Some(summary.into());
    }
}

/// The self-reported side of every comparison.
///
/// # Example
///
/// ```
/// use sympatico_core::{Realm, UserVirtueProfile};
///
/// let profile = UserVirtueProfile::new()
///     .with_score("vitality", 72.0)
///     .with_score("space", 35.0)
///     .with_realm_summary(Realm::Biological, "Up at dawn, always moving.");
///
/// assert_eq!(profile.score_for("space"), Some(35.0));
/// assert_eq!(profile.score_for("humor"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserVirtueProfile {
    /// Full or partial list of the user's scores.
    #[cfg_attr(feature = "serde", serde(default))]
    pub scores: Vec<VirtueScore>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub realm_summaries: RealmSummaries,
    #[cfg_attr(feature = "serde", serde(default))]
    pub last_updated: Option<DateTime<Utc>>,
}

impl UserVirtueProfile {
    /// Creates an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a profile from a list of scores.
    pub fn from_scores(scores: Vec<VirtueScore>) -> Self {
        Self {
            scores,
            ..Self::default()
        }
    }

    /// Appends a score.
    pub fn with_score(mut self, virtue_id: impl Into<String>, score: f64) -> Self {
        self.scores.push(VirtueScore::new(virtue_id, score));
        self
    }

    /// Sets the free-text summary for a realm.
    pub fn with_realm_summary(mut self, realm: Realm, summary: impl Into<String>) -> Self {
        self.realm_summaries.set(realm, summary);
        self
    }

    pub fn with_last_updated(mut self, at: DateTime<Utc>) -> Self {
        self.last_updated = Some(at);
        self
    }

    /// Returns the first score recorded for `virtue_id`.
    pub fn score_for(&self, virtue_id: &str) -> Option<f64> {
        self.scores
            .iter()
            .find(|s| s.virtue_id == virtue_id)
            .map(|s| s.score)
    }
}
