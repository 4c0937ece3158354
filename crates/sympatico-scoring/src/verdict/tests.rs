//! Tests for the verdict engine.

use sympatico_core::{get_virtue_by_id, DeltaCategory, Verdict, VirtueDefinition, VIRTUES};

use super::*;

fn virtue(id: &str) -> &'static VirtueDefinition {
    get_virtue_by_id(id).unwrap()
}

// Deltas 0.0, 0.5, ..., 100.0
fn delta_sweep() -> impl Iterator<Item = f64> {
    (0..=200).map(|i| i as f64 * 0.5)
}

// ============================================================================
// calculate_verdict
// ============================================================================

mod thresholds {
    use super::*;

    #[test]
    fn test_low_boundaries() {
        assert_eq!(calculate_verdict(0.0, DeltaCategory::Low), Verdict::Sympatico);
        assert_eq!(calculate_verdict(19.0, DeltaCategory::Low), Verdict::Sympatico);
        assert_eq!(calculate_verdict(19.99, DeltaCategory::Low), Verdict::Sympatico);
        assert_eq!(calculate_verdict(20.0, DeltaCategory::Low), Verdict::Friction);
        assert_eq!(calculate_verdict(34.0, DeltaCategory::Low), Verdict::Friction);
        assert_eq!(calculate_verdict(35.0, DeltaCategory::Low), Verdict::Danger);
        assert_eq!(calculate_verdict(100.0, DeltaCategory::Low), Verdict::Danger);
    }

    #[test]
    fn test_medium_dangerous_boundaries() {
        let c = DeltaCategory::MediumDangerous;
        assert_eq!(calculate_verdict(14.0, c), Verdict::Sympatico);
        assert_eq!(calculate_verdict(15.0, c), Verdict::Friction);
        assert_eq!(calculate_verdict(29.0, c), Verdict::Friction);
        assert_eq!(calculate_verdict(30.0, c), Verdict::Danger);
    }

    #[test]
    fn test_medium_magic_boundaries() {
        let c = DeltaCategory::MediumMagic;
        assert_eq!(calculate_verdict(0.0, c), Verdict::Friction);
        assert_eq!(calculate_verdict(9.0, c), Verdict::Friction);
        assert_eq!(calculate_verdict(10.0, c), Verdict::Sympatico);
        assert_eq!(calculate_verdict(39.0, c), Verdict::Sympatico);
        assert_eq!(calculate_verdict(40.0, c), Verdict::Danger);
    }

    #[test]
    fn test_flexible_boundaries() {
        let c = DeltaCategory::Flexible;
        assert_eq!(calculate_verdict(39.0, c), Verdict::Sympatico);
        assert_eq!(calculate_verdict(40.0, c), Verdict::Friction);
        assert_eq!(calculate_verdict(100.0, c), Verdict::Friction);
    }
}

mod properties {
    use super::*;

    #[test]
    fn test_totality() {
        for category in DeltaCategory::ALL {
            for delta in delta_sweep() {
                let verdict = calculate_verdict(delta, category);
                assert!(Verdict::ALL.contains(&verdict));
            }
        }
    }

    #[test]
    fn test_monotonic_categories() {
        for category in [
            DeltaCategory::Low,
            DeltaCategory::MediumDangerous,
            DeltaCategory::Flexible,
        ] {
            let mut previous = Verdict::Sympatico;
            for delta in delta_sweep() {
                let verdict = calculate_verdict(delta, category);
                assert!(
                    verdict >= previous,
                    "{category} regressed from {previous} to {verdict} at delta {delta}"
                );
                previous = verdict;
            }
        }
    }

    #[test]
    fn test_medium_magic_dips_then_rises() {
        let c = DeltaCategory::MediumMagic;
        let near = calculate_verdict(0.0, c);
        let moderate = calculate_verdict(25.0, c);
        let far = calculate_verdict(60.0, c);

        assert_eq!(near, Verdict::Friction);
        assert_eq!(moderate, Verdict::Sympatico);
        assert_eq!(far, Verdict::Danger);
        assert!(moderate < near && near < far);
    }

    #[test]
    fn test_band_edges_match_verdicts() {
        for category in DeltaCategory::ALL {
            let calm = sympatico_from(category);
            assert_eq!(calculate_verdict(calm, category), Verdict::Sympatico);
            if calm > 0.0 {
                assert_ne!(calculate_verdict(calm - 0.5, category), Verdict::Sympatico);
            }

            match danger_from(category) {
                Some(edge) => {
                    assert_eq!(calculate_verdict(edge, category), Verdict::Danger);
                    assert_ne!(calculate_verdict(edge - 0.5, category), Verdict::Danger);
                }
                None => assert!(delta_sweep()
                    .all(|delta| calculate_verdict(delta, category) != Verdict::Danger)),
            }
        }
    }

    #[test]
    fn test_flexible_never_dangerous() {
        for delta in delta_sweep() {
            assert_ne!(calculate_verdict(delta, DeltaCategory::Flexible), Verdict::Danger);
        }
    }
}

// ============================================================================
// calculate_virtue_compatibility
// ============================================================================

mod virtue_compatibility {
    use super::*;

    #[test]
    fn test_delta_is_absolute() {
        let forward = calculate_virtue_compatibility(virtue("vitality"), 30.0, 70.0, None);
        let backward = calculate_virtue_compatibility(virtue("vitality"), 70.0, 30.0, None);
        assert_eq!(forward.delta, 40.0);
        assert_eq!(backward.delta, 40.0);
        assert_eq!(forward.verdict, backward.verdict);
    }

    #[test]
    fn test_echoes_inputs() {
        let result = calculate_virtue_compatibility(virtue("humor"), 12.0, 30.0, None);
        assert_eq!(result.virtue_id, "humor");
        assert_eq!(result.user_score, 12.0);
        assert_eq!(result.match_score, 30.0);
    }

    #[test]
    fn test_non_finite_scores_count_as_neutral() {
        let result = calculate_virtue_compatibility(virtue("vitality"), f64::NAN, 50.0, None);
        assert_eq!(result.user_score, 50.0);
        assert_eq!(result.delta, 0.0);
        assert_eq!(result.verdict, Verdict::Sympatico);
        assert!(!result.note.contains("NaN"));

        let result =
            calculate_virtue_compatibility(virtue("space"), 50.0, f64::NEG_INFINITY, None);
        assert_eq!(result.match_score, 50.0);
        assert_eq!(result.verdict, Verdict::Sympatico);
    }

    #[test]
    fn test_out_of_range_scores_are_clamped() {
        let result = calculate_virtue_compatibility(virtue("tradition"), -40.0, 150.0, None);
        assert_eq!(result.user_score, 0.0);
        assert_eq!(result.match_score, 100.0);
        assert_eq!(result.delta, 100.0);
        assert_eq!(result.verdict, Verdict::Danger);
    }

    #[test]
    fn test_evidence_wins_over_synthesized_note() {
        for verdict_inputs in [(50.0, 50.0), (50.0, 75.0), (10.0, 90.0)] {
            let result = calculate_virtue_compatibility(
                virtue("space"),
                verdict_inputs.0,
                verdict_inputs.1,
                Some("Mentions needing weekends alone."),
            );
            assert_eq!(result.note, "Mentions needing weekends alone.");
        }
    }

    #[test]
    fn test_evidence_is_not_sanitized() {
        let result = calculate_virtue_compatibility(virtue("humor"), 50.0, 50.0, Some("  <b>"));
        assert_eq!(result.note, "  <b>");
    }

    #[test]
    fn test_sympatico_note_is_aligned() {
        let result = calculate_virtue_compatibility(virtue("vitality"), 60.0, 65.0, None);
        assert_eq!(result.verdict, Verdict::Sympatico);
        assert!(result.note.starts_with("Aligned on Vitality"));
    }

    #[test]
    fn test_friction_note_is_tension() {
        let result = calculate_virtue_compatibility(virtue("vitality"), 40.0, 65.0, None);
        assert_eq!(result.verdict, Verdict::Friction);
        assert!(result.note.contains("tension"));
        assert!(result.note.contains("25-point"));
    }

    #[test]
    fn test_danger_note_names_both_poles() {
        let result = calculate_virtue_compatibility(virtue("vitality"), 10.0, 90.0, None);
        assert_eq!(result.verdict, Verdict::Danger);
        assert!(result.note.contains("gap"));
        assert!(result.note.contains("Restorative"));
        assert!(result.note.contains("High Voltage"));
        assert!(!result.is_critical_note());
    }

    #[test]
    fn test_critical_danger_note() {
        let result = calculate_virtue_compatibility(virtue("space"), 10.0, 80.0, None);
        assert_eq!(result.delta, 70.0);
        assert_eq!(result.verdict, Verdict::Danger);
        assert!(result.note.starts_with("CRITICAL"));
        assert!(result.note.contains("anxious/avoidant"));
        assert!(result.is_critical_note());
    }

    #[test]
    fn test_critical_virtue_friction_is_not_critical() {
        let result = calculate_virtue_compatibility(virtue("space"), 40.0, 65.0, None);
        assert_eq!(result.verdict, Verdict::Friction);
        assert!(!result.note.contains("CRITICAL"));
    }

    #[test]
    fn test_medium_magic_notes() {
        let similar = calculate_virtue_compatibility(virtue("curiosity"), 50.0, 55.0, None);
        assert_eq!(similar.verdict, Verdict::Friction);
        assert!(similar.note.contains("Too similar"));

        let complementary = calculate_virtue_compatibility(virtue("curiosity"), 40.0, 65.0, None);
        assert_eq!(complementary.verdict, Verdict::Sympatico);
        assert!(complementary.note.starts_with("Complementary"));
    }

    #[test]
    fn test_critical_note_without_risk_pattern_falls_back() {
        let custom = VirtueDefinition {
            id: "loyalty",
            name: "Loyalty",
            risk_pattern: None,
            critical: true,
            ..VIRTUES[0].clone()
        };
        let result = calculate_virtue_compatibility(&custom, 0.0, 100.0, None);
        assert!(result.note.starts_with("CRITICAL"));
        assert!(result.note.contains("relationship-breaking"));
    }
}
