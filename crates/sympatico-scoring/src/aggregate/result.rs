//! Aggregate match results and their analysis helpers.

use sympatico_core::{get_virtue_by_id, Realm, Verdict, VirtueScore};

use crate::verdict::VirtueCompatibility;

/// One 0–100 compatibility score per realm.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealmScores {
    pub biological: f64,
    pub emotional: f64,
    pub cerebral: f64,
}

impl RealmScores {
    /// Returns the score for `realm`.
    pub fn get(&self, realm: Realm) -> f64 {
        match realm {
            Realm::Biological => self.biological,
            Realm::Emotional => self.emotional,
            Realm::Cerebral => self.cerebral,
        }
    }

    /// Returns the realm with the lowest score, first in registry order on ties.
    pub fn weakest(&self) -> Realm {
        Realm::ALL
            .into_iter()
            .fold(Realm::Biological, |weakest, realm| {
                if self.get(realm) < self.get(weakest) {
                    realm
                } else {
                    weakest
                }
            })
    }
}

/// Complete compatibility verdict for a user and one prospective match.
///
/// `compatibility` always holds one entry per registry virtue, in registry
/// order, and the three verdict tallies always sum to that length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchVirtueCompatibility {
    /// The match's input scores, echoed back unchanged.
    pub scores: Vec<VirtueScore>,
    /// Per-virtue results in registry order.
    pub compatibility: Vec<VirtueCompatibility>,
    pub realm_scores: RealmScores,
    /// Overall 0–100 compatibility.
    pub overall_score: f64,
    pub danger_count: usize,
    pub friction_count: usize,
    pub sympatico_count: usize,
    /// One warning per critical virtue judged dangerous.
    pub critical_issues: Vec<String>,
}

impl MatchVirtueCompatibility {
    /// Returns the result for one virtue.
    pub fn get(&self, virtue_id: &str) -> Option<&VirtueCompatibility> {
        self.compatibility.iter().find(|c| c.virtue_id == virtue_id)
    }

    /// Returns the number of results carrying `verdict`.
    pub fn count(&self, verdict: Verdict) -> usize {
        match verdict {
            Verdict::Sympatico => self.sympatico_count,
            Verdict::Friction => self.friction_count,
            Verdict::Danger => self.danger_count,
        }
    }

    /// Returns every result carrying `verdict`, in registry order.
    pub fn by_verdict(&self, verdict: Verdict) -> Vec<&VirtueCompatibility> {
        self.compatibility
            .iter()
            .filter(|c| c.verdict == verdict)
            .collect()
    }

    /// Returns the dangerous results, in registry order.
    pub fn dangers(&self) -> Vec<&VirtueCompatibility> {
        self.by_verdict(Verdict::Danger)
    }

    /// Returns the results in the given realm, in registry order.
    pub fn realm_compatibility(&self, realm: Realm) -> Vec<&VirtueCompatibility> {
        self.compatibility
            .iter()
            .filter(|c| get_virtue_by_id(&c.virtue_id).is_some_and(|v| v.realm == realm))
            .collect()
    }

    /// Returns all results sorted worst first: by severity, then by gap.
    pub fn worst_dimensions(&self) -> Vec<&VirtueCompatibility> {
        let mut worst: Vec<_> = self.compatibility.iter().collect();
        worst.sort_by(|a, b| {
            b.verdict
                .cmp(&a.verdict)
                .then_with(|| b.delta.total_cmp(&a.delta))
        });
        worst
    }

    pub fn has_critical_issues(&self) -> bool {
        !self.critical_issues.is_empty()
    }
}
