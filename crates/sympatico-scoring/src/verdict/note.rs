// Explanatory notes synthesized for a verdict when the caller supplies none.

use sympatico_core::{DeltaCategory, Verdict, VirtueDefinition};

/// Marker every critical-danger note starts with.
pub(crate) const CRITICAL_PREFIX: &str = "CRITICAL";

// Risk named when a critical virtue carries no explicit pattern.
const FALLBACK_RISK: &str = "a relationship-breaking mismatch";

pub(crate) fn synthesize_note(virtue: &VirtueDefinition, delta: f64, verdict: Verdict) -> String {
    let name = virtue.name;
    let (low, high) = (virtue.low_label, virtue.high_label);
    let magic = virtue.delta_category == DeltaCategory::MediumMagic;

    match verdict {
        Verdict::Sympatico if magic => format!(
            "Complementary {name}: a {delta:.0}-point difference adds spark without pulling you apart."
        ),
        Verdict::Sympatico => format!(
            "Aligned on {name}: you sit close together between {low} and {high}."
        ),
        Verdict::Friction if magic => format!(
            "Too similar on {name}: only {delta:.0} points apart, this lacks complementary spark."
        ),
        Verdict::Friction => format!(
            "Some tension on {name}: a {delta:.0}-point gap between {low} and {high} will need conversation."
        ),
        Verdict::Danger if virtue.critical => {
            let risk = virtue.risk_pattern.unwrap_or(FALLBACK_RISK);
            format!(
                "{CRITICAL_PREFIX}: a {delta:.0}-point gap on {name} ({low} vs {high}) signals {risk}."
            )
        }
        Verdict::Danger => format!(
            "Significant gap on {name}: {delta:.0} points separate {low} from {high}."
        ),
    }
}
