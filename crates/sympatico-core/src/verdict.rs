//! Verdict labels produced for a single virtue comparison.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SympaticoError};

/// Outcome of comparing two people on one virtue.
///
/// Variants are declared in increasing order of severity, so the derived
/// ordering sorts `Sympatico < Friction < Danger`.
///
/// # Example
///
/// ```
/// use sympatico_core::Verdict;
///
/// assert!(Verdict::Danger > Verdict::Friction);
/// assert_eq!(Verdict::Friction.label(), "Friction");
/// assert_eq!("danger".parse::<Verdict>().unwrap(), Verdict::Danger);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Verdict {
    /// Aligned, or complementary in a good way.
    Sympatico,
    /// Manageable tension that needs conversation.
    Friction,
    /// High-risk mismatch.
    Danger,
}

impl Verdict {
    /// All verdicts in increasing severity.
    pub const ALL: [Verdict; 3] = [Verdict::Sympatico, Verdict::Friction, Verdict::Danger];

    /// Returns the lowercase tag for this verdict.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Verdict::Sympatico => "sympatico",
            Verdict::Friction => "friction",
            Verdict::Danger => "danger",
        }
    }

    /// Returns the capitalized display label.
    pub const fn label(&self) -> &'static str {
        match self {
            Verdict::Sympatico => "Sympatico",
            Verdict::Friction => "Friction",
            Verdict::Danger => "Danger",
        }
    }

    /// Severity rank: 0 for sympatico, 1 for friction, 2 for danger.
    pub const fn severity(&self) -> u8 {
        match self {
            Verdict::Sympatico => 0,
            Verdict::Friction => 1,
            Verdict::Danger => 2,
        }
    }

    #[inline]
    pub const fn is_danger(&self) -> bool {
        matches!(self, Verdict::Danger)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verdict {
    type Err = SympaticoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sympatico" => Ok(Verdict::Sympatico),
            "friction" => Ok(Verdict::Friction),
            "danger" => Ok(Verdict::Danger),
            other => Err(SympaticoError::UnknownVerdict(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Verdict::Sympatico < Verdict::Friction);
        assert!(Verdict::Friction < Verdict::Danger);
        for pair in Verdict::ALL.windows(2) {
            assert!(pair[0].severity() < pair[1].severity());
        }
    }

    #[test]
    fn test_labels_are_distinct() {
        assert_eq!(Verdict::Sympatico.label(), "Sympatico");
        assert_eq!(Verdict::Friction.label(), "Friction");
        assert_eq!(Verdict::Danger.label(), "Danger");
    }

    #[test]
    fn test_parse() {
        for verdict in Verdict::ALL {
            assert_eq!(verdict.as_str().parse::<Verdict>().unwrap(), verdict);
        }
        assert_eq!(
            "Danger".parse::<Verdict>(),
            Err(SympaticoError::UnknownVerdict("Danger".to_string()))
        );
    }

    #[test]
    fn test_is_danger() {
        assert!(Verdict::Danger.is_danger());
        assert!(!Verdict::Friction.is_danger());
        assert!(!Verdict::Sympatico.is_danger());
    }
}
