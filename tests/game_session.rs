//! Integration tests for the game manager: lifecycle, limits, hints, timers.

mod common;

use common::{niko, retired_legend, s1mple, zywoo};
use player_guesser_web::{
    Attribute, Difficulty, GameError, GameManager, GuessStatus, HintCategory, Outbox, PlayerCatalog,
    PlayerRecord, PoolConfig, Termination,
};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

fn manager_with(records: Vec<PlayerRecord>, config: PoolConfig) -> (GameManager, Arc<Outbox>) {
    let outbox = Arc::new(Outbox::new());
    let manager = GameManager::new(PlayerCatalog::from_records(records), config, outbox.clone());
    (manager, outbox)
}

/// s1mple is the only normal-pool player; NiKo and ZywOo exist only as wrong guesses.
fn manager() -> (GameManager, Arc<Outbox>) {
    let config = PoolConfig::default().with_rankings(vec![("NAVI", 1)], 30);
    manager_with(vec![s1mple(), niko(), zywoo()], config)
}

#[tokio::test]
async fn single_player_hard_game_is_won_immediately() {
    let (m, _) = manager_with(vec![s1mple()], PoolConfig::default());
    let info = m.start("chat-1", Some("hard"), "chat-1").unwrap();
    assert_eq!(info.difficulty, Difficulty::Hard);
    assert_eq!(info.guess_limit, 15);
    assert_eq!(info.time_limit_minutes, 7);

    let outcome = m.guess("chat-1", "s1mple").unwrap();
    assert!(outcome.feedback.is_win);
    match outcome.status {
        GuessStatus::Won { secret } => assert_eq!(secret.name, "s1mple"),
        other => panic!("expected a win, got {:?}", other),
    }
    assert!(!m.is_active("chat-1"));
    assert_eq!(m.guess("chat-1", "s1mple").unwrap_err(), GameError::NoActiveGame);
}

#[tokio::test]
async fn restart_while_active_is_rejected() {
    let (m, _) = manager();
    let first = m.start("chat-1", None, "chat-1").unwrap();
    assert_eq!(m.start("chat-1", Some("hard"), "chat-1").unwrap_err(), GameError::GameAlreadyActive);
    assert!(m.is_active("chat-1"));
    // Original game is untouched.
    let d = m.stop("chat-1").unwrap();
    assert_eq!(d.secret.name, "s1mple");
    assert_ne!(first.game_id, m.start("chat-1", None, "chat-1").unwrap().game_id);
}

#[tokio::test]
async fn unknown_difficulty_falls_back_to_normal() {
    let (m, _) = manager();
    let info = m.start("chat-1", Some("insane"), "chat-1").unwrap();
    assert_eq!(info.difficulty, Difficulty::Normal);
    assert_eq!(info.guess_limit, 10);
    assert_eq!(info.time_limit_minutes, 5);
}

#[tokio::test]
async fn start_fails_without_catalog_or_pool() {
    let outbox = Arc::new(Outbox::new());
    let m = GameManager::new(PlayerCatalog::new(), PoolConfig::default(), outbox);
    assert_eq!(m.start("chat-1", None, "chat-1").unwrap_err(), GameError::CatalogUnavailable);

    // A load that brought in nobody is no better than no load.
    let (m, _) = manager_with(Vec::new(), PoolConfig::default());
    assert_eq!(m.start("chat-1", Some("hard"), "chat-1").unwrap_err(), GameError::CatalogUnavailable);

    // No top clubs configured: the normal pool is empty.
    let (m, _) = manager_with(vec![s1mple()], PoolConfig::default());
    assert_eq!(m.start("chat-1", None, "chat-1").unwrap_err(), GameError::NoEligiblePlayers);
    assert!(!m.is_active("chat-1"));
    assert_eq!(m.active_sessions(), 0);
}

#[tokio::test]
async fn remaining_attempts_count_down_to_exhaustion() {
    let (m, _) = manager();
    let info = m.start("chat-1", None, "chat-1").unwrap();
    let limit = info.guess_limit;

    for k in 1..limit {
        let guess = if k % 2 == 0 { "NiKo" } else { "zyw0o" };
        let outcome = m.guess("chat-1", guess).unwrap();
        assert!(!outcome.feedback.is_win);
        assert_eq!(outcome.status, GuessStatus::Continue { remaining: limit - k });
    }

    let last = m.guess("chat-1", "NiKo").unwrap();
    match last.status {
        GuessStatus::LimitExhausted { secret } => assert_eq!(secret.name, "s1mple"),
        other => panic!("expected exhaustion, got {:?}", other),
    }
    assert!(!m.is_active("chat-1"));
}

#[tokio::test]
async fn invalid_guesses_do_not_consume_attempts() {
    let (m, _) = manager();
    m.start("chat-1", None, "chat-1").unwrap();

    assert_eq!(m.guess("chat-1", "   ").unwrap_err(), GameError::EmptyGuess);
    assert_eq!(
        m.guess("chat-1", "coldzera").unwrap_err(),
        GameError::UnknownPlayer("coldzera".to_string())
    );
    let outcome = m.guess("chat-1", "NiKo").unwrap();
    assert_eq!(outcome.status, GuessStatus::Continue { remaining: 9 });
}

#[tokio::test]
async fn commands_without_a_game_report_no_active_game() {
    let (m, _) = manager();
    assert_eq!(m.guess("nobody", "NiKo").unwrap_err(), GameError::NoActiveGame);
    assert_eq!(m.hint("nobody").unwrap_err(), GameError::NoActiveGame);
    assert_eq!(m.stop("nobody").unwrap_err(), GameError::NoActiveGame);
}

#[tokio::test]
async fn hints_never_repeat_and_run_out() {
    let (m, _) = manager();
    m.start("chat-1", None, "chat-1").unwrap();

    let mut seen = HashSet::new();
    for _ in 0..HintCategory::ALL.len() {
        let hint = m.hint("chat-1").unwrap();
        assert!(seen.insert(hint.category), "category {:?} repeated", hint.category);
        let expected = match hint.category {
            HintCategory::Role => "Rifler",
            HintCategory::Nationality => "Ukraine",
            HintCategory::Continent => "Europe",
            HintCategory::Club => "NAVI",
            HintCategory::MajorParticipations => "3",
        };
        assert_eq!(hint.value, expected);
    }
    assert_eq!(m.hint("chat-1").unwrap_err(), GameError::HintsExhausted);
    assert_eq!(m.hint("chat-1").unwrap_err(), GameError::HintsExhausted);
    // Exhausted hints leave the game running.
    assert!(m.is_active("chat-1"));
}

#[tokio::test]
async fn club_hint_for_retired_player_shows_raw_club() {
    let (m, _) = manager_with(vec![retired_legend()], PoolConfig::default());
    m.start("chat-1", Some("hard"), "chat-1").unwrap();

    let club = (0..HintCategory::ALL.len())
        .map(|_| m.hint("chat-1").unwrap())
        .find(|h| h.category == HintCategory::Club)
        .expect("club hint should be given");
    assert_eq!(club.value, "N/A");

    // Feedback reports the same value for the same player.
    let outcome = m.guess("chat-1", "get_right").unwrap();
    let club_feedback = outcome
        .feedback
        .attributes
        .iter()
        .find(|a| a.attribute == Attribute::Club)
        .unwrap();
    assert_eq!(club_feedback.guessed_value, club.value);
}

#[tokio::test]
async fn stop_discloses_and_ends_the_game() {
    let (m, outbox) = manager();
    m.start("chat-1", None, "group-7").unwrap();
    let d = m.stop("chat-1").unwrap();
    assert_eq!(d.reason, Termination::Stopped);
    assert_eq!(d.secret.name, "s1mple");
    assert_eq!(m.stop("chat-1").unwrap_err(), GameError::NoActiveGame);
    assert!(outbox.drain("group-7").is_empty());
}

#[tokio::test]
async fn sessions_are_independent() {
    let (m, _) = manager();
    m.start("a", None, "a").unwrap();
    m.start("b", Some("advanced"), "b").unwrap();
    m.guess("a", "NiKo").unwrap();
    m.stop("b").unwrap();
    assert!(m.is_active("a"));
    assert!(!m.is_active("b"));
    assert_eq!(m.guess("a", "NiKo").unwrap().status, GuessStatus::Continue { remaining: 8 });
}

#[tokio::test(start_paused = true)]
async fn idle_session_times_out_with_one_push() {
    let (m, outbox) = manager();
    m.start("chat-1", None, "group-7").unwrap();

    tokio::time::sleep(Duration::from_secs(299)).await;
    assert!(m.is_active("chat-1"));

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert!(!m.is_active("chat-1"));
    assert_eq!(m.guess("chat-1", "NiKo").unwrap_err(), GameError::NoActiveGame);

    let pushed = outbox.drain("group-7");
    assert_eq!(pushed.len(), 1);
    assert!(pushed[0].contains("s1mple"));

    tokio::time::sleep(Duration::from_secs(600)).await;
    assert!(outbox.drain("group-7").is_empty());
}

#[tokio::test(start_paused = true)]
async fn guess_at_the_deadline_ends_the_game_once() {
    let (m, outbox) = manager();
    m.start("chat-1", None, "group-7").unwrap();

    tokio::time::sleep(Duration::from_secs(300)).await;
    match m.guess("chat-1", "s1mple") {
        Ok(outcome) => {
            assert!(matches!(outcome.status, GuessStatus::Won { .. }));
            assert!(outbox.drain("group-7").is_empty());
        }
        Err(GameError::NoActiveGame) => assert_eq!(outbox.drain("group-7").len(), 1),
        Err(other) => panic!("unexpected error at the deadline: {:?}", other),
    }
    assert!(!m.is_active("chat-1"));

    tokio::time::sleep(Duration::from_secs(600)).await;
    assert!(outbox.drain("group-7").is_empty());
}

#[tokio::test(start_paused = true)]
async fn ended_games_never_time_out() {
    let (m, outbox) = manager();
    m.start("won", None, "won").unwrap();
    m.start("stopped", None, "stopped").unwrap();
    m.guess("won", "s1mple").unwrap();
    m.stop("stopped").unwrap();

    tokio::time::sleep(Duration::from_secs(1000)).await;
    assert!(outbox.drain("won").is_empty());
    assert!(outbox.drain("stopped").is_empty());
}

#[tokio::test]
async fn late_timer_loses_to_a_finished_command() {
    let (m, outbox) = manager();
    let old = m.start("chat-1", None, "chat-1").unwrap();
    m.stop("chat-1").unwrap();
    assert!(!m.on_timer_expiry("chat-1", old.game_id));

    // A timer from an earlier game must not end the new one.
    let new = m.start("chat-1", None, "chat-1").unwrap();
    assert!(!m.on_timer_expiry("chat-1", old.game_id));
    assert!(m.is_active("chat-1"));

    assert!(m.on_timer_expiry("chat-1", new.game_id));
    assert!(!m.on_timer_expiry("chat-1", new.game_id));
    assert_eq!(outbox.drain("chat-1").len(), 1);
    assert_eq!(m.stop("chat-1").unwrap_err(), GameError::NoActiveGame);
}

#[tokio::test(start_paused = true)]
async fn shutdown_cancels_timers_and_clears_sessions() {
    let (m, outbox) = manager();
    m.start("a", None, "a").unwrap();
    m.start("b", Some("hard"), "b").unwrap();
    assert_eq!(m.active_sessions(), 2);

    m.shutdown();
    assert_eq!(m.active_sessions(), 0);

    tokio::time::sleep(Duration::from_secs(1000)).await;
    assert!(outbox.drain("a").is_empty());
    assert!(outbox.drain("b").is_empty());
}

#[tokio::test]
async fn catalog_reload_keeps_running_secret() {
    let (m, _) = manager();
    m.start("chat-1", None, "chat-1").unwrap();
    m.load_catalog(vec![niko()]);
    assert_eq!(m.catalog().len(), 1);
    let d = m.stop("chat-1").unwrap();
    assert_eq!(d.secret.name, "s1mple");
}
