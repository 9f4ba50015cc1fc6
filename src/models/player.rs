//! PlayerRecord, Role tags and name normalization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Club value used by the dataset for players without a team (retired, free agents).
pub const NO_CLUB: &str = "N/A";

/// Placeholder shown for attributes the dataset does not know.
pub const UNKNOWN: &str = "Unknown";

/// A single role tag. Anything the loader does not recognise is kept as `Other`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Rifler,
    Awper,
    InGameLeader,
    EntryFragger,
    Lurker,
    Support,
    Anchor,
    Coach,
    Other(String),
}

impl Role {
    /// Map a single trimmed tag to a role (case-insensitive). Empty or "unknown" yields None.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        if tag.is_empty() {
            return None;
        }
        let role = match tag.to_ascii_lowercase().as_str() {
            "unknown" | "n/a" => return None,
            "rifler" => Role::Rifler,
            "awper" | "awp" | "sniper" => Role::Awper,
            "igl" | "in-game leader" | "in game leader" | "ingame leader" => Role::InGameLeader,
            "entry" | "entry fragger" | "entryfragger" => Role::EntryFragger,
            "lurker" => Role::Lurker,
            "support" => Role::Support,
            "anchor" => Role::Anchor,
            "coach" => Role::Coach,
            _ => Role::Other(tag.to_string()),
        };
        Some(role)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Rifler => write!(f, "Rifler"),
            Role::Awper => write!(f, "AWPer"),
            Role::InGameLeader => write!(f, "IGL"),
            Role::EntryFragger => write!(f, "Entry"),
            Role::Lurker => write!(f, "Lurker"),
            Role::Support => write!(f, "Support"),
            Role::Anchor => write!(f, "Anchor"),
            Role::Coach => write!(f, "Coach"),
            Role::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Set of role tags. Empty means the role is unknown.
pub type RoleSet = BTreeSet<Role>;

/// One player from the dataset.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub age: Option<u32>,
    pub roles: RoleSet,
    pub nationality: Option<String>,
    pub continent: Option<String>,
    /// `NO_CLUB` when the player has no team.
    pub club: String,
    pub major_participations: u32,
}

impl PlayerRecord {
    /// Key used by the catalog index for this player.
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }

    /// True when the club is the no-club sentinel.
    pub fn is_clubless(&self) -> bool {
        self.club == NO_CLUB
    }

    /// Roles joined for display ("Rifler/IGL"), or the unknown placeholder.
    pub fn roles_label(&self) -> String {
        if self.roles.is_empty() {
            return UNKNOWN.to_string();
        }
        self.roles
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("/")
    }

    pub fn age_label(&self) -> String {
        self.age
            .map(|a| a.to_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub fn nationality_label(&self) -> &str {
        self.nationality.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn continent_label(&self) -> &str {
        self.continent.as_deref().unwrap_or(UNKNOWN)
    }
}

/// Lower-case and fold look-alike characters (`0` -> `o`, `1` -> `i`) for fuzzy name matching.
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '0' => 'o',
            '1' => 'i',
            other => other,
        })
        .collect()
}
