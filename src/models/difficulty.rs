//! Difficulty tiers and their guess/time limits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Difficulty label chosen when starting a game.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Players from top-ranked clubs (plus the allowlist).
    #[default]
    Normal,
    /// Normal pool plus retired veterans with many majors.
    Advanced,
    /// Whole catalog.
    Hard,
}

/// Limits attached to a difficulty.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DifficultySetting {
    pub guess_limit: u32,
    pub time_limit_secs: u64,
}

impl DifficultySetting {
    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.time_limit_secs)
    }

    /// Time limit in whole minutes, rounded up.
    pub fn time_limit_minutes(&self) -> u64 {
        self.time_limit_secs.div_ceil(60)
    }
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Normal, Difficulty::Advanced, Difficulty::Hard];

    /// Resolve a free-text argument. Anything unrecognised (or absent) falls back to `Normal`.
    pub fn resolve(arg: Option<&str>) -> Self {
        let Some(arg) = arg else {
            return Difficulty::default();
        };
        let arg = arg.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(arg))
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Normal => "normal",
            Difficulty::Advanced => "advanced",
            Difficulty::Hard => "hard",
        }
    }

    pub fn setting(&self) -> DifficultySetting {
        match self {
            Difficulty::Normal => DifficultySetting {
                guess_limit: 10,
                time_limit_secs: 300,
            },
            Difficulty::Advanced => DifficultySetting {
                guess_limit: 12,
                time_limit_secs: 300,
            },
            Difficulty::Hard => DifficultySetting {
                guess_limit: 15,
                time_limit_secs: 420,
            },
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
