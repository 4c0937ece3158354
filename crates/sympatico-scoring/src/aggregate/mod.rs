//! Match aggregator: reduces the eleven per-virtue judgments into one verdict.
//!
//! # Scoring
//!
//! Each virtue contributes an alignment of `100 - delta` and a verdict
//! penalty taken from [`ScoringWeights`]. A realm score is the mean of
//! `alignment - penalty` over the realm's virtues. The overall score is the
//! mean alignment minus the *sum* of all penalties, so a single dangerous
//! gap is never averaged away by ten good ones.
//!
//! Because the overall score is linear in each virtue's alignment and
//! penalty, [`best_score_with_dangers`] can compute the highest score any
//! pair of profiles reaches with a given number of dangers. Configuration
//! validation uses it to reject weights that would let
//! [`SEVERAL_DANGERS`] dangers score [`DANGER_CEILING`] or more.

mod result;


pub use result::{MatchVirtueCompatibility, RealmScores};

use sympatico_core::{
    clamp_score, Realm, UserVirtueProfile, Verdict, VirtueDefinition, VirtueScore, MAX_SCORE,
    MIN_SCORE, VIRTUES, VIRTUE_COUNT,
};
use tracing::{debug, info, trace, warn};

use crate::verdict::{
    calculate_verdict, calculate_virtue_compatibility, danger_from, sympatico_from,
};
use crate::weights::ScoringWeights;

/// Scores a match against a user with the default weights.
///
/// Never panics: unknown virtue ids are ignored and every registry virtue
/// without a usable score falls back to the neutral midpoint.
///
/// # Example
///
/// ```
/// use sympatico_core::{UserVirtueProfile, VirtueScore};
/// use sympatico_scoring::calculate_match_compatibility;
///
/// let user = UserVirtueProfile::new().with_score("space", 10.0);
/// let scores = vec![VirtueScore::new("space", 80.0)];
///
/// let result = calculate_match_compatibility(&user, &scores);
/// assert_eq!(result.compatibility.len(), 11);
/// assert_eq!(result.danger_count + result.friction_count + result.sympatico_count, 11);
/// assert_eq!(result.critical_issues.len(), 1);
/// ```
pub fn calculate_match_compatibility(
    user_profile: &UserVirtueProfile,
    match_scores: &[VirtueScore],
) -> MatchVirtueCompatibility {
    calculate_match_compatibility_with(user_profile, match_scores, &ScoringWeights::default())
}

/// Number of dangers that must always leave a match below [`DANGER_CEILING`].
pub const SEVERAL_DANGERS: usize = 3;

/// Overall score a match with [`SEVERAL_DANGERS`] dangers must stay below.
pub const DANGER_CEILING: f64 = 50.0;

/// Scores a match against a user with explicit penalty weights.
///
/// `weights` are used as given. Hand-built weights are not validated, so
/// weights with a danger penalty at or below the friction penalty, or too
/// small for [`best_score_with_dangers`] to stay under [`DANGER_CEILING`],
/// produce scores that no longer rank dangers below frictions. Load weights
/// through a validated configuration when they come from outside.
pub fn calculate_match_compatibility_with(
    user_profile: &UserVirtueProfile,
    match_scores: &[VirtueScore],
    weights: &ScoringWeights,
) -> MatchVirtueCompatibility {
    let mut compatibility = Vec::with_capacity(VIRTUE_COUNT);
    let mut realms = RealmAccumulator::default();
    let mut alignment_total = 0.0;
    let mut penalty_total = 0.0;
    let (mut danger_count, mut friction_count, mut sympatico_count) = (0, 0, 0);
    let mut critical_issues = Vec::new();

    for virtue in VIRTUES.iter() {
        let user_entry = find_score(&user_profile.scores, virtue.id);
        let match_entry = find_score(match_scores, virtue.id);
        let user_score = resolve_score(user_entry, virtue, "user", weights.neutral_score);
        let match_score = resolve_score(match_entry, virtue, "match", weights.neutral_score);
        let evidence = match_entry.and_then(|s| s.evidence.as_deref());

        let result = calculate_virtue_compatibility(virtue, user_score, match_score, evidence);

        let alignment = MAX_SCORE - result.delta;
        let penalty = weights.penalty_for(result.verdict, virtue.critical);
        alignment_total += alignment;
        penalty_total += penalty;
        realms.add(virtue.realm, alignment - penalty);

        match result.verdict {
            Verdict::Danger => danger_count += 1,
            Verdict::Friction => friction_count += 1,
            Verdict::Sympatico => sympatico_count += 1,
        }

        debug!(
            event = "virtue_scored",
            virtue = virtue.id,
            delta = result.delta,
            verdict = result.verdict.as_str(),
        );

        if virtue.critical && result.verdict == Verdict::Danger {
            warn!(event = "critical_issue", virtue = virtue.id, delta = result.delta);
            critical_issues.push(critical_issue(virtue, result.delta));
        }

        compatibility.push(result);
    }

    let mean_alignment = alignment_total / VIRTUE_COUNT as f64;
    let overall_score = to_points(mean_alignment - penalty_total);

    info!(
        event = "match_scored",
        overall_score,
        danger_count,
        friction_count,
        sympatico_count,
    );

    MatchVirtueCompatibility {
        scores: match_scores.to_vec(),
        compatibility,
        realm_scores: realms.finish(),
        overall_score,
        danger_count,
        friction_count,
        sympatico_count,
        critical_issues,
    }
}

/// Highest overall score reachable with exactly `dangers` danger verdicts.
///
/// Each virtue is placed at its best non-dangerous gap, then the `dangers`
/// virtues that lose the least by crossing into danger at their smallest
/// dangerous gap are flipped. Returns `None` if the registry has fewer
/// virtues that can be dangerous.
///
/// # Example
///
/// ```
/// use sympatico_scoring::{best_score_with_dangers, ScoringWeights, DANGER_CEILING};
///
/// let best = best_score_with_dangers(&ScoringWeights::default(), 3).unwrap();
/// assert!(best < DANGER_CEILING);
/// assert!(best_score_with_dangers(&ScoringWeights::default(), 11).is_none());
/// ```
pub fn best_score_with_dangers(weights: &ScoringWeights, dangers: usize) -> Option<f64> {
    let count = VIRTUE_COUNT as f64;
    let mut total = 0.0;
    let mut losses = Vec::with_capacity(VIRTUE_COUNT);

    for virtue in VIRTUES.iter() {
        let category = virtue.delta_category;
        let identical = calculate_verdict(0.0, category);
        let calm = f64::max(
            MAX_SCORE / count - weights.penalty_for(identical, virtue.critical),
            (MAX_SCORE - sympatico_from(category)) / count,
        );
        total += calm;

        if let Some(delta) = danger_from(category) {
            let danger = (MAX_SCORE - delta) / count
                - weights.penalty_for(Verdict::Danger, virtue.critical);
            losses.push(calm - danger);
        }
    }

    if losses.len() < dangers {
        return None;
    }
    losses.sort_by(f64::total_cmp);
    let lost: f64 = losses.iter().take(dangers).sum();
    Some(to_points(total - lost))
}

fn find_score<'a>(scores: &'a [VirtueScore], virtue_id: &str) -> Option<&'a VirtueScore> {
    scores.iter().find(|s| s.virtue_id == virtue_id)
}

fn resolve_score(
    entry: Option<&VirtueScore>,
    virtue: &VirtueDefinition,
    side: &'static str,
    neutral: f64,
) -> f64 {
    match entry {
        Some(entry) if entry.score.is_finite() => clamp_score(entry.score),
        _ => {
            trace!(event = "score_defaulted", virtue = virtue.id, side, neutral);
            clamp_score(neutral)
        }
    }
}

fn critical_issue(virtue: &VirtueDefinition, delta: f64) -> String {
    match virtue.risk_pattern {
        Some(risk) => format!("{}: {:.0}-point gap risks {}", virtue.name, delta, risk),
        None => format!("{}: {:.0}-point gap on a critical dimension", virtue.name, delta),
    }
}

// Clamps into 0-100 and rounds to whole points.
fn to_points(value: f64) -> f64 {
    value.clamp(MIN_SCORE, MAX_SCORE).round()
}

#[derive(Default)]
struct RealmAccumulator {
    biological: (f64, usize),
    emotional: (f64, usize),
    cerebral: (f64, usize),
}

impl RealmAccumulator {
    fn add(&mut self, realm: Realm, value: f64) {
        let slot = match realm {
            Realm::Biological => &mut self.biological,
            Realm::Emotional => &mut self.emotional,
            Realm::Cerebral => &mut self.cerebral,
        };
        slot.0 += value.clamp(MIN_SCORE, MAX_SCORE);
        slot.1 += 1;
    }

    fn finish(&self) -> RealmScores {
        RealmScores {
            biological: mean_points(self.biological),
            emotional: mean_points(self.emotional),
            cerebral: mean_points(self.cerebral),
        }
    }
}

fn mean_points((total, count): (f64, usize)) -> f64 {
    if count == 0 {
        return 0.0;
    }
    to_points(total / count as f64)
}
