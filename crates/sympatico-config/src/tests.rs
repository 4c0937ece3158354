//! Tests for scoring configuration.

use super::*;
use sympatico_core::UserVirtueProfile;
use sympatico_scoring::calculate_match_compatibility_with;
use sympatico_test::{dangerous_scores, minimal_danger_scores, uniform_profile};

#[test]
fn test_toml_parsing() {
    let toml = r#"
        neutral_score = 40

        [penalties]
        friction = 4
        danger = 20
        critical_multiplier = 3
    "#;

    let config = ScoringConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.neutral_score, 40.0);
    assert_eq!(config.penalties.friction, 4.0);
    assert_eq!(config.penalties.danger, 20.0);
    assert_eq!(config.penalties.critical_multiplier, 3.0);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        neutral_score: 40
        penalties:
          friction: 4
          danger: 20
          critical_multiplier: 3
    "#;

    let config = ScoringConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.neutral_score, 40.0);
    assert_eq!(config.penalties.danger, 20.0);
}

#[test]
fn test_missing_fields_use_defaults() {
    let config = ScoringConfig::from_toml_str("").unwrap();
    assert_eq!(config, ScoringConfig::default());

    let config = ScoringConfig::from_toml_str("[penalties]\ndanger = 25").unwrap();
    assert_eq!(config.penalties.friction, DEFAULT_FRICTION_PENALTY);
    assert_eq!(config.penalties.danger, 25.0);
    assert_eq!(config.neutral_score, NEUTRAL_SCORE);
}

#[test]
fn test_default_weights_match_scoring_defaults() {
    assert_eq!(ScoringConfig::default().weights(), ScoringWeights::default());
}

#[test]
fn test_builder() {
    let config = ScoringConfig::new()
        .with_neutral_score(60.0)
        .with_friction_penalty(2.0)
        .with_danger_penalty(20.0)
        .with_critical_multiplier(1.5);

    let weights = config.weights();
    assert_eq!(weights.neutral_score, 60.0);
    assert_eq!(weights.friction_penalty, 2.0);
    assert_eq!(weights.danger_penalty, 20.0);
    assert_eq!(weights.critical_multiplier, 1.5);
    assert!(config.validate().is_ok());
}

// ============================================================================
// Validation
// ============================================================================

mod validation {
    use super::*;

    fn assert_invalid(config: ScoringConfig) {
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_danger_must_exceed_friction() {
        assert_invalid(ScoringConfig::new().with_danger_penalty(5.0));
        assert_invalid(ScoringConfig::new().with_friction_penalty(20.0));
    }

    #[test]
    fn test_danger_penalty_must_keep_three_dangers_below_half() {
        // Cheapest three dangers: 89.09 mean alignment minus three penalties.
        assert_invalid(ScoringConfig::new().with_danger_penalty(10.0));
        assert_invalid(ScoringConfig::new().with_danger_penalty(13.0));
        assert!(ScoringConfig::new()
            .with_danger_penalty(13.5)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_weak_danger_penalty_rejected_when_parsing() {
        let err = ScoringConfig::from_toml_str("[penalties]\nfriction = 5\ndanger = 10")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("too small"));
    }

    #[test]
    fn test_negative_penalty_rejected() {
        assert_invalid(ScoringConfig::new().with_friction_penalty(-1.0));
    }

    #[test]
    fn test_multiplier_below_one_rejected() {
        assert_invalid(ScoringConfig::new().with_critical_multiplier(0.5));
        assert!(ScoringConfig::new()
            .with_critical_multiplier(1.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_neutral_score_out_of_range_rejected() {
        assert_invalid(ScoringConfig::new().with_neutral_score(101.0));
        assert_invalid(ScoringConfig::new().with_neutral_score(-0.5));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_invalid(ScoringConfig::new().with_danger_penalty(f64::INFINITY));
        assert_invalid(ScoringConfig::new().with_neutral_score(f64::NAN));
    }

    #[test]
    fn test_parsing_validates() {
        let err = ScoringConfig::from_toml_str("[penalties]\nfriction = 30\ndanger = 10")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("penalties.danger"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            ScoringConfig::from_toml_str("neutral_score = \"high\""),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            ScoringConfig::from_yaml_str("penalties: [1, 2]"),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = ScoringConfig::load("does/not/exist/sympatico.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert_eq!(
            ScoringConfig::load("does/not/exist/sympatico.toml").unwrap_or_default(),
            ScoringConfig::default()
        );
    }
}

// ============================================================================
// Integration with scoring
// ============================================================================

#[test]
fn test_configured_weights_change_overall_score() {
    let user = uniform_profile(50.0);
    let scores = dangerous_scores(50.0);

    let default =
        calculate_match_compatibility_with(&user, &scores, &ScoringConfig::default().weights());
    let harsh = ScoringConfig::new().with_danger_penalty(25.0);
    let harsh = calculate_match_compatibility_with(&user, &scores, &harsh.weights());

    assert_eq!(default.danger_count, 3);
    assert_eq!(harsh.danger_count, 3);
    assert!(harsh.overall_score < default.overall_score);
}

#[test]
fn test_valid_config_keeps_cheapest_dangers_below_half() {
    for danger in [13.5, 15.0, 30.0] {
        let config = ScoringConfig::new().with_danger_penalty(danger);
        assert!(config.validate().is_ok());

        let result = calculate_match_compatibility_with(
            &uniform_profile(50.0),
            &minimal_danger_scores(50.0),
            &config.weights(),
        );
        assert_eq!(result.danger_count, 3);
        assert!(result.overall_score < 50.0, "danger {danger}: {}", result.overall_score);
    }
}

#[test]
fn test_configured_neutral_fills_missing_scores() {
    let config = ScoringConfig::new().with_neutral_score(80.0);
    let result =
        calculate_match_compatibility_with(&UserVirtueProfile::new(), &[], &config.weights());

    assert_eq!(result.compatibility.len(), 11);
    assert!(result
        .compatibility
        .iter()
        .all(|c| c.user_score == 80.0 && c.match_score == 80.0));
    assert_eq!(result.danger_count, 0);
}
