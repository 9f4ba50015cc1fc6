//! Game manager: session table, lifecycle transitions and per-session timeouts.
//!
//! The session table is the only mutable shared state. Command handlers and timer
//! callbacks both go through the same lock, and whoever removes a session first owns
//! its terminal message; the other side finds nothing and does nothing.

use crate::logic::catalog::PlayerCatalog;
use crate::logic::feedback::compare;
use crate::logic::pool::{pool_for, PoolConfig};
use crate::models::{
    Difficulty, Disclosure, GameError, GameId, GameSession, GuessOutcome, GuessStatus, Hint,
    PlayerRecord, StartInfo, Termination,
};
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, Weak};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Delivers messages the host did not ask for (timeouts) to a session's origin.
pub trait Notifier: Send + Sync {
    fn push(&self, origin: &str, disclosure: Disclosure);
}

type SessionTable = HashMap<String, GameSession>;

struct Inner {
    catalog: RwLock<Arc<PlayerCatalog>>,
    pool_config: PoolConfig,
    sessions: Mutex<SessionTable>,
    notifier: Arc<dyn Notifier>,
}

/// Cheap to clone; all clones share one session table.
///
/// `start` spawns the session timer with `tokio::spawn`, so it must be called from
/// within a tokio runtime.
#[derive(Clone)]
pub struct GameManager {
    inner: Arc<Inner>,
}

impl GameManager {
    pub fn new(catalog: PlayerCatalog, pool_config: PoolConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            inner: Arc::new(Inner {
                catalog: RwLock::new(Arc::new(catalog)),
                pool_config,
                sessions: Mutex::new(HashMap::new()),
                notifier,
            }),
        }
    }

    /// Current catalog snapshot.
    pub fn catalog(&self) -> Arc<PlayerCatalog> {
        let guard = self
            .inner
            .catalog
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replace the catalog. Running games keep their secret player.
    pub fn load_catalog(&self, records: Vec<PlayerRecord>) {
        let catalog = Arc::new(PlayerCatalog::from_records(records));
        log::info!("Loaded {} player(s) into the catalog", catalog.len());
        *self
            .inner
            .catalog
            .write()
            .unwrap_or_else(PoisonError::into_inner) = catalog;
    }

    pub fn is_active(&self, session_id: &str) -> bool {
        self.sessions().contains_key(session_id)
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions().len()
    }

    /// Start a game for `session_id`. A running game is never replaced.
    pub fn start(
        &self,
        session_id: &str,
        difficulty_arg: Option<&str>,
        origin: &str,
    ) -> Result<StartInfo, GameError> {
        let catalog = self.catalog();
        if !catalog.is_loaded() {
            return Err(GameError::CatalogUnavailable);
        }

        let mut sessions = self.sessions();
        if sessions.contains_key(session_id) {
            return Err(GameError::GameAlreadyActive);
        }

        let difficulty = Difficulty::resolve(difficulty_arg);
        let pool = pool_for(difficulty, &catalog, &self.inner.pool_config).map_err(|e| match e {
            GameError::EmptyPool => GameError::NoEligiblePlayers,
            other => other,
        })?;
        let secret = pool
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(GameError::NoEligiblePlayers)?;

        let setting = difficulty.setting();
        let mut session = GameSession::new(secret, difficulty, setting, origin);
        session.timer = Some(self.schedule_timeout(
            session_id.to_string(),
            session.game_id,
            setting.time_limit(),
        ));

        let info = StartInfo {
            game_id: session.game_id,
            difficulty,
            guess_limit: session.guess_limit,
            time_limit_minutes: setting.time_limit_minutes(),
            deadline: session.deadline(),
        };
        log::info!(
            "Session {} started a {} game ({} candidates), secret: {}",
            session_id,
            difficulty,
            pool.len(),
            session.secret.name
        );
        sessions.insert(session_id.to_string(), session);
        Ok(info)
    }

    /// Evaluate a guess. Unknown names do not consume an attempt.
    pub fn guess(&self, session_id: &str, raw_text: &str) -> Result<GuessOutcome, GameError> {
        let catalog = self.catalog();
        let mut sessions = self.sessions();
        let session = sessions.get_mut(session_id).ok_or(GameError::NoActiveGame)?;

        let name = raw_text.trim();
        if name.is_empty() {
            return Err(GameError::EmptyGuess);
        }
        let guessed = catalog
            .lookup(name)?
            .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))?;

        let feedback = compare(&guessed, &session.secret);
        if feedback.is_win {
            let ended = end_session(&mut sessions, session_id, Termination::Won)
                .ok_or(GameError::NoActiveGame)?;
            return Ok(GuessOutcome {
                feedback,
                status: GuessStatus::Won {
                    secret: (*ended.secret).clone(),
                },
            });
        }

        session.guess_count += 1;
        let remaining = session.remaining_guesses();
        if remaining > 0 {
            return Ok(GuessOutcome {
                feedback,
                status: GuessStatus::Continue { remaining },
            });
        }

        let ended = end_session(&mut sessions, session_id, Termination::LimitExhausted)
            .ok_or(GameError::NoActiveGame)?;
        Ok(GuessOutcome {
            feedback,
            status: GuessStatus::LimitExhausted {
                secret: (*ended.secret).clone(),
            },
        })
    }

    /// Reveal one random attribute of the secret that has not been revealed yet.
    pub fn hint(&self, session_id: &str) -> Result<Hint, GameError> {
        let mut sessions = self.sessions();
        let session = sessions.get_mut(session_id).ok_or(GameError::NoActiveGame)?;
        let category = *session
            .remaining_hints()
            .choose(&mut rand::thread_rng())
            .ok_or(GameError::HintsExhausted)?;
        session.given_hints.insert(category);
        Ok(Hint {
            category,
            value: category.value_of(&session.secret),
        })
    }

    /// End the game on request and reveal the secret.
    pub fn stop(&self, session_id: &str) -> Result<Disclosure, GameError> {
        let mut sessions = self.sessions();
        let ended = end_session(&mut sessions, session_id, Termination::Stopped)
            .ok_or(GameError::NoActiveGame)?;
        Ok(Disclosure {
            reason: Termination::Stopped,
            secret: (*ended.secret).clone(),
        })
    }

    /// Called when a session's deadline passes. Only acts if the same game is still live;
    /// returns whether it ended the game (and pushed the disclosure).
    pub fn on_timer_expiry(&self, session_id: &str, game_id: GameId) -> bool {
        let ended = {
            let mut sessions = self.sessions();
            // A game started later under the same session id has its own timer.
            let live = sessions
                .get(session_id)
                .is_some_and(|s| s.game_id == game_id);
            if live {
                end_session(&mut sessions, session_id, Termination::TimedOut)
            } else {
                None
            }
        };
        let Some(ended) = ended else {
            log::debug!("Timer for session {} fired after its game ended", session_id);
            return false;
        };
        self.inner.notifier.push(
            &ended.origin,
            Disclosure {
                reason: Termination::TimedOut,
                secret: (*ended.secret).clone(),
            },
        );
        true
    }

    /// Cancel every timer and drop all live sessions.
    pub fn shutdown(&self) {
        let mut sessions = self.sessions();
        let count = sessions.len();
        for (_, mut session) in sessions.drain() {
            session.cancel_timer();
        }
        log::info!("Game manager shut down, cleared {} active session(s)", count);
    }

    fn sessions(&self) -> MutexGuard<'_, SessionTable> {
        self.inner
            .sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn schedule_timeout(&self, session_id: String, game_id: GameId, after: Duration) -> JoinHandle<()> {
        let inner: Weak<Inner> = Arc::downgrade(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            if let Some(inner) = inner.upgrade() {
                GameManager { inner }.on_timer_expiry(&session_id, game_id);
            }
        })
    }
}

/// Remove a session and cancel its timer. `None` if it was already gone.
fn end_session(sessions: &mut SessionTable, session_id: &str, reason: Termination) -> Option<GameSession> {
    let mut session = sessions.remove(session_id)?;
    session.cancel_timer();
    log::info!(
        "Session {} ended ({:?}) after {} wrong guess(es), secret was {}",
        session_id,
        reason,
        session.guess_count,
        session.secret.name
    );
    Some(session)
}
