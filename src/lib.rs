//! Guess-the-player game: library with models, game logic, dataset loading and the host adapter.

pub mod host;
pub mod loader;
pub mod logic;
pub mod messages;
pub mod models;

pub use host::{handle, Command, Outbox};
pub use logic::{compare, pool_for, GameManager, Notifier, PlayerCatalog, PoolConfig};
pub use models::{
    Attribute, Difficulty, Disclosure, Feedback, GameError, GuessOutcome, GuessStatus, Hint,
    HintCategory, PlayerRecord, Role, StartInfo, Termination, Verdict,
};
