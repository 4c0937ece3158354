//! The static virtue registry.

use super::definition::{DeltaCategory, VirtueDefinition};
use crate::realm::Realm;

/// Number of virtue dimensions in the registry.
pub const VIRTUE_COUNT: usize = 11;

/// Every virtue dimension, grouped by realm in declaration order.
pub static VIRTUES: [VirtueDefinition; VIRTUE_COUNT] = [
    // Biological
    VirtueDefinition {
        id: "vitality",
        name: "Vitality",
        realm: Realm::Biological,
        delta_category: DeltaCategory::Low,
        critical: false,
        low_label: "Restorative",
        high_label: "High Voltage",
        risk_pattern: None,
        description: "Baseline energy level and appetite for activity.",
    },
    VirtueDefinition {
        id: "sensuality",
        name: "Sensuality",
        realm: Realm::Biological,
        delta_category: DeltaCategory::MediumDangerous,
        critical: false,
        low_label: "Reserved",
        high_label: "Tactile",
        risk_pattern: None,
        description: "Need for physical affection, touch and closeness.",
    },
    VirtueDefinition {
        id: "rhythm",
        name: "Rhythm",
        realm: Realm::Biological,
        delta_category: DeltaCategory::Flexible,
        critical: false,
        low_label: "Night Owl",
        high_label: "Early Riser",
        risk_pattern: None,
        description: "Daily cadence of sleep, work and rest.",
    },
    // Emotional
    VirtueDefinition {
        id: "space",
        name: "Space",
        realm: Realm::Emotional,
        delta_category: DeltaCategory::Low,
        critical: true,
        low_label: "Inseparable",
        high_label: "Fiercely Independent",
        risk_pattern: Some("an anxious/avoidant attachment mismatch"),
        description: "Need for autonomy, independence and time apart.",
    },
    VirtueDefinition {
        id: "expression",
        name: "Expression",
        realm: Realm::Emotional,
        delta_category: DeltaCategory::MediumMagic,
        critical: false,
        low_label: "Contained",
        high_label: "Open Book",
        risk_pattern: None,
        description: "How readily feelings are shown and talked about.",
    },
    VirtueDefinition {
        id: "warmth",
        name: "Warmth",
        realm: Realm::Emotional,
        delta_category: DeltaCategory::MediumDangerous,
        critical: false,
        low_label: "Cool",
        high_label: "Nurturing",
        risk_pattern: None,
        description: "Instinct to care for, reassure and tend to a partner.",
    },
    VirtueDefinition {
        id: "resilience",
        name: "Resilience",
        realm: Realm::Emotional,
        delta_category: DeltaCategory::MediumMagic,
        critical: false,
        low_label: "Sensitive",
        high_label: "Unshakeable",
        risk_pattern: None,
        description: "How stress, conflict and setbacks are absorbed.",
    },
    // Cerebral
    VirtueDefinition {
        id: "curiosity",
        name: "Curiosity",
        realm: Realm::Cerebral,
        delta_category: DeltaCategory::MediumMagic,
        critical: false,
        low_label: "Grounded",
        high_label: "Explorer",
        risk_pattern: None,
        description: "Hunger for new ideas, places and experiences.",
    },
    VirtueDefinition {
        id: "ambition",
        name: "Ambition",
        realm: Realm::Cerebral,
        delta_category: DeltaCategory::MediumDangerous,
        critical: false,
        low_label: "Content",
        high_label: "Driven",
        risk_pattern: None,
        description: "Drive to build, achieve and climb.",
    },
    VirtueDefinition {
        id: "humor",
        name: "Humor",
        realm: Realm::Cerebral,
        delta_category: DeltaCategory::Flexible,
        critical: false,
        low_label: "Earnest",
        high_label: "Playful",
        risk_pattern: None,
        description: "Appetite for banter, teasing and play.",
    },
    VirtueDefinition {
        id: "tradition",
        name: "Tradition",
        realm: Realm::Cerebral,
        delta_category: DeltaCategory::Low,
        critical: false,
        low_label: "Progressive",
        high_label: "Traditional",
        risk_pattern: None,
        description: "Attachment to custom, faith and conventional milestones.",
    },
];

/// Looks up a virtue by its exact, case-sensitive id.
///
/// # Example
///
/// ```
/// use sympatico_core::get_virtue_by_id;
///
/// let space = get_virtue_by_id("space").unwrap();
/// assert!(space.critical);
/// assert!(get_virtue_by_id("Space").is_none());
/// ```
pub fn get_virtue_by_id(id: &str) -> Option<&'static VirtueDefinition> {
    VIRTUES.iter().find(|v| v.id == id)
}

/// Returns every virtue in `realm`, in registry order.
pub fn get_virtues_by_realm(realm: Realm) -> Vec<&'static VirtueDefinition> {
    VIRTUES.iter().filter(|v| v.realm == realm).collect()
}

/// Iterates the virtues flagged as relationship-critical.
pub fn critical_virtues() -> impl Iterator<Item = &'static VirtueDefinition> {
    VIRTUES.iter().filter(|v| v.critical)
}
