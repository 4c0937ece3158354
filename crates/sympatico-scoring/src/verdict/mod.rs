//! Verdict engine: per-virtue judgments.
//!
//! [`calculate_verdict`] maps a score gap onto a [`Verdict`] under one of the
//! four tolerance policies. [`calculate_virtue_compatibility`] runs that
//! judgment for one virtue and attaches an explanatory note.

mod compatibility;
mod note;

#[cfg(test)]
mod tests;

pub use compatibility::{calculate_virtue_compatibility, VirtueCompatibility};

use sympatico_core::{DeltaCategory, Verdict};

/// Gap thresholds for the `Low` policy: (friction from, danger from).
pub const LOW_THRESHOLDS: (f64, f64) = (20.0, 35.0);

/// Gap thresholds for the `MediumDangerous` policy: (friction from, danger from).
pub const MEDIUM_DANGEROUS_THRESHOLDS: (f64, f64) = (15.0, 30.0);

/// Below this gap a `MediumMagic` pair is too similar.
pub const MAGIC_SPARK_MIN: f64 = 10.0;

/// From this gap a `MediumMagic` pair is dangerous.
pub const MAGIC_DANGER_FROM: f64 = 40.0;

/// From this gap a `Flexible` pair has friction.
pub const FLEXIBLE_FRICTION_FROM: f64 = 40.0;

/// Judges a non-negative gap between two scores under a tolerance policy.
///
/// Lower bounds are inclusive: a gap of exactly 20 on a `Low` virtue is
/// already friction.
///
/// # Example
///
/// ```
/// use sympatico_core::{DeltaCategory, Verdict};
/// use sympatico_scoring::calculate_verdict;
///
/// assert_eq!(calculate_verdict(19.0, DeltaCategory::Low), Verdict::Sympatico);
/// assert_eq!(calculate_verdict(20.0, DeltaCategory::Low), Verdict::Friction);
/// assert_eq!(calculate_verdict(35.0, DeltaCategory::Low), Verdict::Danger);
///
/// // Too similar is friction; a moderate gap is the sweet spot.
/// assert_eq!(calculate_verdict(0.0, DeltaCategory::MediumMagic), Verdict::Friction);
/// assert_eq!(calculate_verdict(25.0, DeltaCategory::MediumMagic), Verdict::Sympatico);
///
/// assert_eq!(calculate_verdict(100.0, DeltaCategory::Flexible), Verdict::Friction);
/// ```
pub fn calculate_verdict(delta: f64, category: DeltaCategory) -> Verdict {
    match category {
        DeltaCategory::Low => banded(delta, LOW_THRESHOLDS),
        DeltaCategory::MediumDangerous => banded(delta, MEDIUM_DANGEROUS_THRESHOLDS),
        DeltaCategory::MediumMagic => {
            if delta >= MAGIC_DANGER_FROM {
                Verdict::Danger
            } else if delta >= MAGIC_SPARK_MIN {
                Verdict::Sympatico
            } else {
                Verdict::Friction
            }
        }
        DeltaCategory::Flexible => {
            if delta < FLEXIBLE_FRICTION_FROM {
                Verdict::Sympatico
            } else {
                Verdict::Friction
            }
        }
    }
}

// Monotonic policy: sympatico below the first threshold, danger from the second.
fn banded(delta: f64, (friction_from, danger_from): (f64, f64)) -> Verdict {
    if delta < friction_from {
        Verdict::Sympatico
    } else if delta < danger_from {
        Verdict::Friction
    } else {
        Verdict::Danger
    }
}

/// Smallest gap judged dangerous under a policy, or `None` if the policy
/// never reaches danger.
pub fn danger_from(category: DeltaCategory) -> Option<f64> {
    match category {
        DeltaCategory::Low => Some(LOW_THRESHOLDS.1),
        DeltaCategory::MediumDangerous => Some(MEDIUM_DANGEROUS_THRESHOLDS.1),
        DeltaCategory::MediumMagic => Some(MAGIC_DANGER_FROM),
        DeltaCategory::Flexible => None,
    }
}

/// Smallest gap judged sympatico under a policy.
pub fn sympatico_from(category: DeltaCategory) -> f64 {
    match category {
        DeltaCategory::MediumMagic => MAGIC_SPARK_MIN,
        _ => 0.0,
    }
}
