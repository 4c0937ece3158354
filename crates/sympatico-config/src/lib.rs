//! Configuration system for Sympatico.
//!
//! Load scoring configuration from TOML or YAML files to tune verdict
//! penalties and the neutral midpoint without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use sympatico_config::ScoringConfig;
//!
//! let config = ScoringConfig::from_toml_str(r#"
//!     neutral_score = 50
//!
//!     [penalties]
//!     friction = 4
//!     danger = 18
//!     critical_multiplier = 2.5
//! "#).unwrap();
//!
//! assert_eq!(config.penalties.danger, 18.0);
//! assert_eq!(config.weights().danger_penalty, 18.0);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use sympatico_config::ScoringConfig;
//!
//! let config = ScoringConfig::load("sympatico.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use sympatico_core::{MAX_SCORE, MIN_SCORE, NEUTRAL_SCORE};
use sympatico_scoring::weights::{
    DEFAULT_CRITICAL_MULTIPLIER, DEFAULT_DANGER_PENALTY, DEFAULT_FRICTION_PENALTY,
};
use sympatico_scoring::{
    best_score_with_dangers, ScoringWeights, DANGER_CEILING, SEVERAL_DANGERS,
};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main scoring configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ScoringConfig {
    /// Score assumed for a virtue with no usable input.
    #[serde(default = "default_neutral_score")]
    pub neutral_score: f64,

    /// Verdict penalty configuration.
    #[serde(default)]
    pub penalties: PenaltyConfig,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            neutral_score: NEUTRAL_SCORE,
            penalties: PenaltyConfig::default(),
        }
    }
}

impl ScoringConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the neutral midpoint.
    pub fn with_neutral_score(mut self, score: f64) -> Self {
        self.neutral_score = score;
        self
    }

    /// Sets the friction penalty.
    pub fn with_friction_penalty(mut self, penalty: f64) -> Self {
        self.penalties.friction = penalty;
        self
    }

    /// Sets the danger penalty.
    pub fn with_danger_penalty(mut self, penalty: f64) -> Self {
        self.penalties.danger = penalty;
        self
    }

    /// Sets the critical danger multiplier.
    pub fn with_critical_multiplier(mut self, multiplier: f64) -> Self {
        self.penalties.critical_multiplier = multiplier;
        self
    }

    /// Checks that the configuration keeps the scoring invariants.
    ///
    /// Penalties must be finite and non-negative, a danger must cost
    /// strictly more than a friction, the critical multiplier must be at
    /// least 1, and the neutral score must lie on the 0–100 spectrum.
    ///
    /// The danger penalty must also be large enough that no match with
    /// three dangers reaches an overall score of 50. With the default
    /// friction penalty that means a danger penalty above roughly 13.2.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.penalties;

        for (name, value) in [
            ("penalties.friction", p.friction),
            ("penalties.danger", p.danger),
            ("penalties.critical_multiplier", p.critical_multiplier),
            ("neutral_score", self.neutral_score),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{name} must be finite")));
            }
        }

        if p.friction < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "penalties.friction must not be negative, got {}",
                p.friction
            )));
        }
        if p.danger <= p.friction {
            return Err(ConfigError::Invalid(format!(
                "penalties.danger ({}) must exceed penalties.friction ({})",
                p.danger, p.friction
            )));
        }
        if p.critical_multiplier < 1.0 {
            return Err(ConfigError::Invalid(format!(
                "penalties.critical_multiplier must be at least 1, got {}",
                p.critical_multiplier
            )));
        }
        if !(MIN_SCORE..=MAX_SCORE).contains(&self.neutral_score) {
            return Err(ConfigError::Invalid(format!(
                "neutral_score must be between {MIN_SCORE} and {MAX_SCORE}, got {}",
                self.neutral_score
            )));
        }
        if let Some(best) = best_score_with_dangers(&self.weights(), SEVERAL_DANGERS) {
            if best >= DANGER_CEILING {
                return Err(ConfigError::Invalid(format!(
                    "penalties.danger ({}) is too small: a match with {SEVERAL_DANGERS} dangers \
                     can still score {best}, must stay below {DANGER_CEILING}",
                    p.danger
                )));
            }
        }
        Ok(())
    }

    /// Converts into the weights consumed by the aggregator.
    pub fn weights(&self) -> ScoringWeights {
        ScoringWeights {
            friction_penalty: self.penalties.friction,
            danger_penalty: self.penalties.danger,
            critical_multiplier: self.penalties.critical_multiplier,
            neutral_score: self.neutral_score,
        }
    }
}

fn default_neutral_score() -> f64 {
    NEUTRAL_SCORE
}

/// Verdict penalty configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PenaltyConfig {
    /// Points subtracted per friction verdict.
    #[serde(default = "default_friction")]
    pub friction: f64,

    /// Points subtracted per danger verdict.
    #[serde(default = "default_danger")]
    pub danger: f64,

    /// Factor applied to the danger penalty on a critical virtue.
    #[serde(default = "default_critical_multiplier")]
    pub critical_multiplier: f64,
}

impl Default for PenaltyConfig {
    fn default() -> Self {
        Self {
            friction: DEFAULT_FRICTION_PENALTY,
            danger: DEFAULT_DANGER_PENALTY,
            critical_multiplier: DEFAULT_CRITICAL_MULTIPLIER,
        }
    }
}

fn default_friction() -> f64 {
    DEFAULT_FRICTION_PENALTY
}

fn default_danger() -> f64 {
    DEFAULT_DANGER_PENALTY
}

fn default_critical_multiplier() -> f64 {
    DEFAULT_CRITICAL_MULTIPLIER
}

#[cfg(test)]
mod tests;
