//! Short natural-language summaries layered on top of an aggregate result.

use std::fmt;

use crate::aggregate::MatchVirtueCompatibility;

/// Overall score from which a match reads as good.
pub const GOOD_SCORE_FROM: f64 = 75.0;

/// Overall score from which a match reads as mixed rather than challenging.
pub const MIXED_SCORE_FROM: f64 = 50.0;

/// Headline tone of a compatibility summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SummaryTone {
    /// Three or more dangers.
    SignificantChallenges,
    /// One or two dangers.
    CriticalArea,
    /// Four or more frictions.
    Communication,
    /// Eight or more sympatico verdicts.
    StrongAlignment,
    Good,
    Mixed,
    Challenging,
}

impl fmt::Display for SummaryTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SummaryTone::SignificantChallenges => "significant_challenges",
            SummaryTone::CriticalArea => "critical_area",
            SummaryTone::Communication => "communication",
            SummaryTone::StrongAlignment => "strong_alignment",
            SummaryTone::Good => "good",
            SummaryTone::Mixed => "mixed",
            SummaryTone::Challenging => "challenging",
        };
        f.write_str(s)
    }
}

/// Picks the headline tone for a result.
///
/// Rules apply in order: danger counts first, then friction, then
/// sympatico, and finally the overall score buckets.
pub fn summary_tone(result: &MatchVirtueCompatibility) -> SummaryTone {
    match result.danger_count {
        d if d >= 3 => SummaryTone::SignificantChallenges,
        1 | 2 => SummaryTone::CriticalArea,
        _ if result.friction_count >= 4 => SummaryTone::Communication,
        _ if result.sympatico_count >= 8 => SummaryTone::StrongAlignment,
        _ if result.overall_score >= GOOD_SCORE_FROM => SummaryTone::Good,
        _ if result.overall_score >= MIXED_SCORE_FROM => SummaryTone::Mixed,
        _ => SummaryTone::Challenging,
    }
}

/// Writes a one-paragraph summary of a result.
///
/// # Example
///
/// ```
/// use sympatico_core::UserVirtueProfile;
/// use sympatico_scoring::{calculate_match_compatibility, generate_compatibility_summary};
///
/// let result = calculate_match_compatibility(&UserVirtueProfile::new(), &[]);
/// let summary = generate_compatibility_summary(&result);
/// assert!(summary.contains("strong alignment"));
/// ```
pub fn generate_compatibility_summary(result: &MatchVirtueCompatibility) -> String {
    let score = result.overall_score;
    match summary_tone(result) {
        SummaryTone::SignificantChallenges => format!(
            "This pairing faces significant challenges: {} areas show dangerous gaps. \
             Overall compatibility sits at {score:.0}%.",
            result.danger_count
        ),
        SummaryTone::CriticalArea => {
            let areas = if result.danger_count == 1 { "area needs" } else { "areas need" };
            format!(
                "Promising in places, but {} critical {areas} discussion before things get serious. \
                 Overall compatibility sits at {score:.0}%.",
                result.danger_count
            )
        }
        SummaryTone::Communication => format!(
            "No dealbreakers, but {} areas of friction mean communication will be key. \
             Overall compatibility sits at {score:.0}%.",
            result.friction_count
        ),
        SummaryTone::StrongAlignment => format!(
            "A strong alignment with high compatibility: {} of {} areas are sympatico. \
             Overall compatibility sits at {score:.0}%.",
            result.sympatico_count,
            result.compatibility.len()
        ),
        SummaryTone::Good => format!(
            "A good match with solid common ground. Overall compatibility sits at {score:.0}%."
        ),
        SummaryTone::Mixed => format!(
            "A mixed picture: some shared ground, some differences to navigate. \
             Overall compatibility sits at {score:.0}%."
        ),
        SummaryTone::Challenging => format!(
            "A challenging match that will take real effort from both sides. \
             Overall compatibility sits at {score:.0}%."
        ),
    }
}
