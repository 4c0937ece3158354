//! Single-virtue compatibility results.

use sympatico_core::{clamp_score, Verdict, VirtueDefinition};

use super::calculate_verdict;
use super::note::synthesize_note;

/// Outcome of comparing two people on one virtue.
///
/// Recomputed on every call and never retained by the engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VirtueCompatibility {
    pub virtue_id: String,
    pub user_score: f64,
    pub match_score: f64,
    /// Absolute gap between the two scores.
    pub delta: f64,
    pub verdict: Verdict,
    /// Caller-supplied evidence, or a synthesized explanation.
    pub note: String,
}

impl VirtueCompatibility {
    /// Returns true if this result carries a critical warning note.
    pub fn is_critical_note(&self) -> bool {
        self.note.starts_with(super::note::CRITICAL_PREFIX)
    }
}

/// Compares two scores on one virtue.
///
/// Scores are clamped into 0–100 first, and a non-finite score counts as
/// the neutral midpoint. When `evidence` is supplied it becomes the note
/// verbatim; otherwise a note is synthesized from the verdict and the
/// virtue's poles.
///
/// # Example
///
/// ```
/// use sympatico_core::{get_virtue_by_id, Verdict};
/// use sympatico_scoring::calculate_virtue_compatibility;
///
/// let space = get_virtue_by_id("space").unwrap();
///
/// let result = calculate_virtue_compatibility(space, 10.0, 80.0, None);
/// assert_eq!(result.delta, 70.0);
/// assert_eq!(result.verdict, Verdict::Danger);
/// assert!(result.note.starts_with("CRITICAL"));
///
/// let result = calculate_virtue_compatibility(space, 10.0, 80.0, Some("Travels 300 days a year."));
/// assert_eq!(result.note, "Travels 300 days a year.");
/// ```
pub fn calculate_virtue_compatibility(
    virtue: &VirtueDefinition,
    user_score: f64,
    match_score: f64,
    evidence: Option<&str>,
) -> VirtueCompatibility {
    let user_score = clamp_score(user_score);
    let match_score = clamp_score(match_score);
    let delta = (user_score - match_score).abs();
    let verdict = calculate_verdict(delta, virtue.delta_category);
    let note = match evidence {
        Some(evidence) => evidence.to_string(),
        None => synthesize_note(virtue, delta, verdict),
    };

    VirtueCompatibility {
        virtue_id: virtue.id.to_string(),
        user_score,
        match_score,
        delta,
        verdict,
        note,
    }
}
