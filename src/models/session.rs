//! GameSession, hint categories, and the typed results returned by the game manager.

use crate::models::difficulty::{Difficulty, DifficultySetting};
use crate::models::feedback::Feedback;
use crate::models::player::PlayerRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Unique identifier of one started game (a session id may host many games over time).
pub type GameId = Uuid;

/// Attribute that can be revealed by a hint.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HintCategory {
    Role,
    Nationality,
    Continent,
    Club,
    MajorParticipations,
}

impl HintCategory {
    pub const ALL: [HintCategory; 5] = [
        HintCategory::Role,
        HintCategory::Nationality,
        HintCategory::Continent,
        HintCategory::Club,
        HintCategory::MajorParticipations,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HintCategory::Role => "role",
            HintCategory::Nationality => "nationality",
            HintCategory::Continent => "continent",
            HintCategory::Club => "club",
            HintCategory::MajorParticipations => "major participations",
        }
    }

    /// The player's value for this category, or the unknown placeholder.
    /// Clubless players report the raw `NO_CLUB` value, as feedback does.
    pub fn value_of(&self, player: &PlayerRecord) -> String {
        match self {
            HintCategory::Role => player.roles_label(),
            HintCategory::Nationality => player.nationality_label().to_string(),
            HintCategory::Continent => player.continent_label().to_string(),
            HintCategory::Club => player.club.clone(),
            HintCategory::MajorParticipations => player.major_participations.to_string(),
        }
    }
}

/// How a session ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    Won,
    LimitExhausted,
    TimedOut,
    Stopped,
}

/// One live game. Owned by the manager's session table; removed on any terminal transition.
#[derive(Debug)]
pub struct GameSession {
    pub game_id: GameId,
    pub secret: Arc<PlayerRecord>,
    pub difficulty: Difficulty,
    pub given_hints: HashSet<HintCategory>,
    /// Incorrect valid guesses so far.
    pub guess_count: u32,
    pub guess_limit: u32,
    pub time_limit_secs: u64,
    pub started_at: DateTime<Utc>,
    /// Where unsolicited messages (timeout) are pushed.
    pub origin: String,
    pub timer: Option<JoinHandle<()>>,
}

impl GameSession {
    pub fn new(
        secret: Arc<PlayerRecord>,
        difficulty: Difficulty,
        setting: DifficultySetting,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            game_id: Uuid::new_v4(),
            secret,
            difficulty,
            given_hints: HashSet::new(),
            guess_count: 0,
            guess_limit: setting.guess_limit,
            time_limit_secs: setting.time_limit_secs,
            started_at: Utc::now(),
            origin: origin.into(),
            timer: None,
        }
    }

    pub fn remaining_guesses(&self) -> u32 {
        self.guess_limit.saturating_sub(self.guess_count)
    }

    pub fn deadline(&self) -> DateTime<Utc> {
        self.started_at + chrono::Duration::seconds(self.time_limit_secs as i64)
    }

    /// Hint categories not yet revealed, in fixed order.
    pub fn remaining_hints(&self) -> Vec<HintCategory> {
        HintCategory::ALL
            .into_iter()
            .filter(|c| !self.given_hints.contains(c))
            .collect()
    }

    /// Abort the scheduled timeout, if any.
    pub fn cancel_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            handle.abort();
        }
    }
}

/// Returned by `start`: what the player needs to know to play.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StartInfo {
    pub game_id: GameId,
    pub difficulty: Difficulty,
    pub guess_limit: u32,
    pub time_limit_minutes: u64,
    pub deadline: DateTime<Utc>,
}

/// What happened to the session after a valid guess.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GuessStatus {
    Won { secret: PlayerRecord },
    Continue { remaining: u32 },
    LimitExhausted { secret: PlayerRecord },
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GuessOutcome {
    pub feedback: Feedback,
    pub status: GuessStatus,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hint {
    pub category: HintCategory,
    pub value: String,
}

/// Secret player revealed at the end of a game (stop, timeout).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Disclosure {
    pub reason: Termination,
    pub secret: PlayerRecord,
}
