//! Canned match scenarios with known verdict shapes.
//!
//! Every scenario is built against a user profile from
//! [`uniform_profile`](crate::profile::uniform_profile) at the same base
//! score, unless it returns its own user profile.

use sympatico_core::{DeltaCategory, UserVirtueProfile, VirtueScore, VIRTUES};

use crate::profile::{uniform_profile, uniform_scores, with_override};

/// Non-critical virtues pushed into danger by [`dangerous_scores`].
pub const DANGEROUS_VIRTUES: [&str; 3] = ["vitality", "ambition", "tradition"];

/// Gap applied to [`DANGEROUS_VIRTUES`]: past every danger threshold.
pub const DANGEROUS_GAP: f64 = 45.0;

/// Gap applied to `MediumMagic` virtues by [`complementary_scores`].
pub const COMPLEMENTARY_GAP: f64 = 25.0;

/// Smallest gap that is dangerous on a `MediumDangerous` virtue.
pub const MINIMAL_DANGER_GAP: f64 = 30.0;

/// Smallest gap that is complementary on a `MediumMagic` virtue.
pub const MINIMAL_SPARK_GAP: f64 = 10.0;

// Moves `base` by `gap`, staying inside the 0-100 spectrum.
fn shifted(base: f64, gap: f64) -> f64 {
    if base + gap <= 100.0 {
        base + gap
    } else {
        base - gap
    }
}

/// Match scores that are sympatico on all eleven virtues against a uniform
/// user at `base`: identical everywhere except the `MediumMagic` virtues,
/// which sit a complementary distance away.
pub fn complementary_scores(base: f64) -> Vec<VirtueScore> {
    VIRTUES
        .iter()
        .map(|v| {
            let score = if v.delta_category == DeltaCategory::MediumMagic {
                shifted(base, COMPLEMENTARY_GAP)
            } else {
                base
            };
            VirtueScore::new(v.id, score)
        })
        .collect()
}

/// Match scores with exactly three non-critical dangers against a uniform
/// user at `base`.
pub fn dangerous_scores(base: f64) -> Vec<VirtueScore> {
    DANGEROUS_VIRTUES
        .iter()
        .fold(uniform_scores(base), |scores, id| {
            with_override(scores, id, shifted(base, DANGEROUS_GAP))
        })
}

/// Match scores with three dangers and as little lost alignment as possible
/// against a uniform user at `base`.
///
/// The `MediumDangerous` virtues sit exactly at their danger threshold, the
/// `MediumMagic` virtues at the smallest complementary gap, and everything
/// else is identical. With the default weights no three-danger match scores
/// higher.
pub fn minimal_danger_scores(base: f64) -> Vec<VirtueScore> {
    VIRTUES
        .iter()
        .map(|v| {
            let score = match v.delta_category {
                DeltaCategory::MediumDangerous => shifted(base, MINIMAL_DANGER_GAP),
                DeltaCategory::MediumMagic => shifted(base, MINIMAL_SPARK_GAP),
                _ => base,
            };
            VirtueScore::new(v.id, score)
        })
        .collect()
}

/// A user and match whose only danger is on the critical `space` virtue:
/// user at 10, match at 80, every other virtue at the neutral midpoint.
pub fn critical_space_pair() -> (UserVirtueProfile, Vec<VirtueScore>) {
    let mut user = uniform_profile(50.0);
    user.scores = with_override(user.scores, "space", 10.0);
    let scores = with_override(uniform_scores(50.0), "space", 80.0);
    (user, scores)
}
