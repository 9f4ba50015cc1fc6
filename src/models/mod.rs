//! Data structures for the guessing game: players, difficulties, sessions, feedback.

mod difficulty;
mod error;
mod feedback;
mod player;
mod session;

pub use difficulty::{Difficulty, DifficultySetting};
pub use error::GameError;
pub use feedback::{Attribute, AttributeFeedback, Feedback, Verdict};
pub use player::{normalize_name, PlayerRecord, Role, RoleSet, NO_CLUB, UNKNOWN};
pub use session::{
    Disclosure, GameId, GameSession, GuessOutcome, GuessStatus, Hint, HintCategory, StartInfo,
    Termination,
};
