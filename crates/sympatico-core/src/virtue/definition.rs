//! Virtue definition and tolerance policy types.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SympaticoError};
use crate::profile::NEUTRAL_SCORE;
use crate::realm::Realm;

/// Tolerance policy deciding which gaps on a virtue are acceptable.
///
/// `MediumMagic` is the only non-monotonic policy: a small gap is penalized
/// because the pair lacks complementary spark, a moderate gap is the best
/// outcome, and only a large gap is dangerous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DeltaCategory {
    /// Must be closely matched.
    Low,
    /// Moderately tolerant, but turns dangerous sooner than `Low`.
    MediumDangerous,
    /// Benefits from a moderate difference.
    MediumMagic,
    /// Tolerant of any gap; never dangerous.
    Flexible,
}

impl DeltaCategory {
    pub const ALL: [DeltaCategory; 4] = [
        DeltaCategory::Low,
        DeltaCategory::MediumDangerous,
        DeltaCategory::MediumMagic,
        DeltaCategory::Flexible,
    ];

    /// Returns the snake_case tag for this category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            DeltaCategory::Low => "low",
            DeltaCategory::MediumDangerous => "medium_dangerous",
            DeltaCategory::MediumMagic => "medium_magic",
            DeltaCategory::Flexible => "flexible",
        }
    }

    /// Returns true if a gap on this category can ever be judged dangerous.
    pub const fn can_be_dangerous(&self) -> bool {
        !matches!(self, DeltaCategory::Flexible)
    }
}

impl fmt::Display for DeltaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeltaCategory {
    type Err = SympaticoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "low" => Ok(DeltaCategory::Low),
            "medium_dangerous" => Ok(DeltaCategory::MediumDangerous),
            "medium_magic" => Ok(DeltaCategory::MediumMagic),
            "flexible" => Ok(DeltaCategory::Flexible),
            other => Err(SympaticoError::UnknownDeltaCategory(other.to_string())),
        }
    }
}

/// Static definition of one virtue dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VirtueDefinition {
    /// Unique slug, e.g. `"vitality"`.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    pub realm: Realm,
    pub delta_category: DeltaCategory,
    /// Whether a dangerous gap here threatens the whole relationship.
    pub critical: bool,
    /// Label for the 0 end of the spectrum.
    pub low_label: &'static str,
    /// Label for the 100 end of the spectrum.
    pub high_label: &'static str,
    /// Known relationship risk a critical danger on this dimension signals.
    pub risk_pattern: Option<&'static str>,
    pub description: &'static str,
}

impl VirtueDefinition {
    /// Returns the pole label a score leans towards.
    ///
    /// Scores below the neutral midpoint lean to `low_label`; everything else
    /// leans to `high_label`.
    pub fn pole(&self, score: f64) -> &'static str {
        if score < NEUTRAL_SCORE {
            self.low_label
        } else {
            self.high_label
        }
    }
}
