//! Host adapter: turns `(session, kind, text, origin)` commands into chat messages
//! and buffers unsolicited pushes per origin.

use crate::logic::{GameManager, Notifier};
use crate::messages;
use crate::models::{Disclosure, GameError};
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::Instant;

/// A player command, independent of any wire syntax.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Start(Option<String>),
    Guess(String),
    Hint,
    Stop,
}

impl Command {
    /// Parse a command kind plus its raw argument text.
    pub fn parse(kind: &str, raw_text: &str) -> Result<Self, GameError> {
        let kind_lower = kind.trim().to_ascii_lowercase();
        match kind_lower.as_str() {
            "start" | "play" => {
                let arg = strip_keyword(raw_text, &kind_lower);
                Ok(Command::Start((!arg.is_empty()).then(|| arg.to_string())))
            }
            "guess" => Ok(Command::Guess(strip_keyword(raw_text, &kind_lower).to_string())),
            "hint" => Ok(Command::Hint),
            "stop" | "quit" => Ok(Command::Stop),
            _ => Err(GameError::UnknownCommand(kind.trim().to_string())),
        }
    }
}

/// Drop a leading command keyword (`"guess NiKo"` -> `"NiKo"`), ignoring an optional `/` prefix.
pub fn strip_keyword<'a>(raw: &'a str, keyword: &str) -> &'a str {
    let text = raw.trim();
    let body = text.strip_prefix('/').unwrap_or(text);
    match body.get(..keyword.len()) {
        Some(head) if head.eq_ignore_ascii_case(keyword) => {
            let rest = &body[keyword.len()..];
            if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                rest.trim()
            } else {
                text
            }
        }
        _ => text,
    }
}

/// Run a command against the manager. Always yields at least one message; game errors
/// become informational replies.
pub fn handle(manager: &GameManager, session_id: &str, origin: &str, kind: &str, raw_text: &str) -> Vec<String> {
    let reply = Command::parse(kind, raw_text).and_then(|cmd| dispatch(manager, session_id, origin, cmd));
    match reply {
        Ok(message) => vec![message],
        Err(e) => {
            log::debug!("Session {}: {} rejected: {}", session_id, kind, e);
            vec![e.to_string()]
        }
    }
}

fn dispatch(manager: &GameManager, session_id: &str, origin: &str, cmd: Command) -> Result<String, GameError> {
    match cmd {
        Command::Start(difficulty) => manager
            .start(session_id, difficulty.as_deref(), origin)
            .map(|info| messages::start_message(&info)),
        Command::Guess(text) => manager
            .guess(session_id, &text)
            .map(|outcome| messages::guess_message(&outcome)),
        Command::Hint => manager.hint(session_id).map(|h| messages::hint_message(&h)),
        Command::Stop => manager
            .stop(session_id)
            .map(|d| messages::disclosure_message(&d)),
    }
}

/// Messages kept per origin; older ones are dropped first.
pub const MAX_PENDING_PER_ORIGIN: usize = 20;

/// Origins nobody collected from within this long are forgotten by `prune_stale`.
pub const OUTBOX_RETENTION: Duration = Duration::from_secs(24 * 3600);

#[derive(Debug)]
struct PendingMessages {
    messages: VecDeque<String>,
    last_push: Instant,
}

/// Notifier that keeps pushed messages until the host collects them.
#[derive(Debug, Default)]
pub struct Outbox {
    pending: Mutex<HashMap<String, PendingMessages>>,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending message for `origin`.
    pub fn drain(&self, origin: &str) -> Vec<String> {
        self.lock()
            .remove(origin)
            .map(|p| p.messages.into())
            .unwrap_or_default()
    }

    /// Number of origins with uncollected messages.
    pub fn pending_origins(&self) -> usize {
        self.lock().len()
    }

    /// Drop origins whose last push is older than `max_age`. Returns how many were removed.
    pub fn prune_stale(&self, max_age: Duration) -> usize {
        let mut pending = self.lock();
        let before = pending.len();
        pending.retain(|_, p| p.last_push.elapsed() < max_age);
        before - pending.len()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, PendingMessages>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Notifier for Outbox {
    fn push(&self, origin: &str, disclosure: Disclosure) {
        log::info!("Pushing {:?} notice to {}", disclosure.reason, origin);
        let mut pending = self.lock();
        let entry = pending
            .entry(origin.to_string())
            .or_insert_with(|| PendingMessages {
                messages: VecDeque::new(),
                last_push: Instant::now(),
            });
        entry.last_push = Instant::now();
        entry.messages.push_back(messages::disclosure_message(&disclosure));
        while entry.messages.len() > MAX_PENDING_PER_ORIGIN {
            entry.messages.pop_front();
        }
    }
}
