//! Error types for Sympatico

use thiserror::Error;

/// Main error type for Sympatico operations.
///
/// Scoring itself is total; errors only arise when parsing external tags
/// into the typed registry vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SympaticoError {
    /// Realm tag is not one of the three known realms
    #[error("Unknown realm: {0}")]
    UnknownRealm(String),

    /// Delta category tag is not one of the four tolerance policies
    #[error("Unknown delta category: {0}")]
    UnknownDeltaCategory(String),

    /// Verdict tag is not one of the three verdicts
    #[error("Unknown verdict: {0}")]
    UnknownVerdict(String),
}

/// Result type alias for Sympatico operations
pub type Result<T> = std::result::Result<T, SympaticoError>;
