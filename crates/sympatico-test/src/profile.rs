//! Profile and score builders.
//!
//! # Example
//!
//! ```
//! use sympatico_test::profile::{profile_from_pairs, uniform_scores};
//!
//! let user = profile_from_pairs(&[("space", 20.0), ("humor", 80.0)]);
//! assert_eq!(user.scores.len(), 2);
//!
//! let scores = uniform_scores(50.0);
//! assert_eq!(scores.len(), 11);
//! ```

use sympatico_core::{UserVirtueProfile, VirtueScore, VIRTUES};

/// Creates one score per registry virtue, all at `score`.
pub fn uniform_scores(score: f64) -> Vec<VirtueScore> {
    VIRTUES
        .iter()
        .map(|v| VirtueScore::new(v.id, score))
        .collect()
}

/// Creates a user profile scoring `score` on every registry virtue.
pub fn uniform_profile(score: f64) -> UserVirtueProfile {
    UserVirtueProfile::from_scores(uniform_scores(score))
}

/// Creates scores from `(virtue_id, score)` pairs, keeping their order.
pub fn scores_from_pairs(pairs: &[(&str, f64)]) -> Vec<VirtueScore> {
    pairs
        .iter()
        .map(|(id, score)| VirtueScore::new(*id, *score))
        .collect()
}

/// Creates a user profile from `(virtue_id, score)` pairs.
pub fn profile_from_pairs(pairs: &[(&str, f64)]) -> UserVirtueProfile {
    UserVirtueProfile::from_scores(scores_from_pairs(pairs))
}

/// Returns `scores` with the entry for `virtue_id` replaced by `score`.
///
/// Appends a new entry if none exists.
pub fn with_override(mut scores: Vec<VirtueScore>, virtue_id: &str, score: f64) -> Vec<VirtueScore> {
    match scores.iter_mut().find(|s| s.virtue_id == virtue_id) {
        Some(entry) => entry.score = score,
        None => scores.push(VirtueScore::new(virtue_id, score)),
    }
    scores
}
