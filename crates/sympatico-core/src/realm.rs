//! Realms group the virtue dimensions into three broad areas of life.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SympaticoError};

/// One of the three groupings of virtues.
///
/// # Example
///
/// ```
/// use sympatico_core::Realm;
///
/// let realm: Realm = "emotional".parse().unwrap();
/// assert_eq!(realm, Realm::Emotional);
/// assert_eq!(realm.as_str(), "emotional");
/// assert!("spiritual".parse::<Realm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Realm {
    /// Body, energy and physical rhythm.
    Biological,
    /// Feeling, attachment and emotional expression.
    Emotional,
    /// Mind, values and ways of thinking.
    Cerebral,
}

impl Realm {
    /// All realms in registry order.
    pub const ALL: [Realm; 3] = [Realm::Biological, Realm::Emotional, Realm::Cerebral];

    /// Returns the lowercase tag for this realm.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Realm::Biological => "biological",
            Realm::Emotional => "emotional",
            Realm::Cerebral => "cerebral",
        }
    }
}

impl fmt::Display for Realm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Realm {
    type Err = SympaticoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "biological" => Ok(Realm::Biological),
            "emotional" => Ok(Realm::Emotional),
            "cerebral" => Ok(Realm::Cerebral),
            other => Err(SympaticoError::UnknownRealm(other.to_string())),
        }
    }
}

/// Display metadata for a realm.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RealmConfig {
    /// The realm described.
    pub realm: Realm,
    /// Human-readable name.
    pub name: &'static str,
    /// Short tagline shown next to the realm score.
    pub tagline: &'static str,
    /// One-sentence description of what the realm covers.
    pub description: &'static str,
}

/// Display metadata for every realm, in registry order.
pub static REALMS: [RealmConfig; 3] = [
    RealmConfig {
        realm: Realm::Biological,
        name: "Biological",
        tagline: "Body & Energy",
        description: "How each of you spends energy, seeks touch and moves through the day.",
    },
    RealmConfig {
        realm: Realm::Emotional,
        name: "Emotional",
        tagline: "Heart & Attachment",
        description: "How each of you bonds, needs room, shows feeling and handles strain.",
    },
    RealmConfig {
        realm: Realm::Cerebral,
        name: "Cerebral",
        tagline: "Mind & Values",
        description: "How each of you thinks, plays, strives and holds on to tradition.",
    },
];

/// Returns the display metadata for a realm.
pub fn realm_config(realm: Realm) -> &'static RealmConfig {
    match realm {
        Realm::Biological => &REALMS[0],
        Realm::Emotional => &REALMS[1],
        Realm::Cerebral => &REALMS[2],
    }
}

/// Looks up realm metadata by its lowercase tag.
///
/// Unknown tags yield `None`.
///
/// # Example
///
/// ```
/// use sympatico_core::get_realm_config;
///
/// assert_eq!(get_realm_config("cerebral").unwrap().name, "Cerebral");
/// assert!(get_realm_config("Cerebral").is_none());
/// ```
pub fn get_realm_config(tag: &str) -> Option<&'static RealmConfig> {
    tag.parse::<Realm>().ok().map(realm_config)
}
