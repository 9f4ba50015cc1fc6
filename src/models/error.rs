//! Errors returned by game operations.

/// Expected, user-facing conditions. None of them changes session state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GameError {
    /// The player catalog has not been loaded.
    CatalogUnavailable,
    /// The computed difficulty pool is empty.
    EmptyPool,
    /// `start` could not draw a secret player (empty pool).
    NoEligiblePlayers,
    /// A game is already running for this session.
    GameAlreadyActive,
    /// No game is running for this session.
    NoActiveGame,
    /// Guess text was blank after extracting the name.
    EmptyGuess,
    /// The guessed name is not in the catalog.
    UnknownPlayer(String),
    /// Every hint category has already been revealed.
    HintsExhausted,
    /// The host sent a command kind we do not handle.
    UnknownCommand(String),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::CatalogUnavailable => {
                write!(f, "Player data is not loaded, the game cannot start right now")
            }
            GameError::EmptyPool => write!(f, "No players are eligible for this difficulty"),
            GameError::NoEligiblePlayers => {
                write!(f, "No players are eligible for this difficulty, the game was not started")
            }
            GameError::GameAlreadyActive => {
                write!(f, "A game is already running here. Use `guess <player>` to play")
            }
            GameError::NoActiveGame => write!(f, "No game is running. Use `start` to begin"),
            GameError::EmptyGuess => write!(f, "Tell me who you guess, e.g. `guess s1mple`"),
            GameError::UnknownPlayer(name) => {
                write!(f, "There is no player called \"{}\" in the database", name)
            }
            GameError::HintsExhausted => write!(f, "All hints have already been given"),
            GameError::UnknownCommand(kind) => write!(f, "Unknown command \"{}\"", kind),
        }
    }
}

impl std::error::Error for GameError {}
