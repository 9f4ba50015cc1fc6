//! Chat text for game results.

use crate::models::{
    Disclosure, Feedback, GuessOutcome, GuessStatus, Hint, PlayerRecord, StartInfo, Termination,
};

pub fn start_message(info: &StartInfo) -> String {
    format!(
        "Game on! Difficulty: {}. I'm thinking of a player; you have {} guesses and {} minute(s). \
         Use `guess <player>` to guess, `hint` for a hint, `stop` to give up.",
        info.difficulty, info.guess_limit, info.time_limit_minutes
    )
}

/// One line of feedback: `Age: 27(↑) | Role: Rifler(√) | ...`.
pub fn feedback_line(feedback: &Feedback) -> String {
    feedback
        .attributes
        .iter()
        .map(|a| format!("{}: {}({})", a.attribute.label(), a.guessed_value, a.verdict.symbol()))
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn guess_message(outcome: &GuessOutcome) -> String {
    let line = feedback_line(&outcome.feedback);
    match &outcome.status {
        GuessStatus::Won { secret } => {
            format!("✅ Correct! The player is {}!\n\n{}", secret.name, line)
        }
        GuessStatus::Continue { remaining } => {
            format!("{}: {}\n{} guess(es) left.", outcome.feedback.guessed_name, line, remaining)
        }
        GuessStatus::LimitExhausted { secret } => format!(
            "{}: {}\n\nOut of guesses! The answer was:\n{}",
            outcome.feedback.guessed_name,
            line,
            player_card(secret)
        ),
    }
}

pub fn hint_message(hint: &Hint) -> String {
    format!("Hint: this player's {} is {}.", hint.category.label(), hint.value)
}

pub fn disclosure_message(disclosure: &Disclosure) -> String {
    let headline = match disclosure.reason {
        Termination::Stopped => "Game stopped.",
        Termination::TimedOut => "⏰ Time's up!",
        Termination::LimitExhausted => "Out of guesses!",
        Termination::Won => "Game won.",
    };
    format!("{} The answer was:\n{}", headline, player_card(&disclosure.secret))
}

/// Full description of a player, used when revealing the secret.
pub fn player_card(p: &PlayerRecord) -> String {
    format!(
        "{} | Age: {} | Role: {} | Nationality: {} | Continent: {} | Club: {} | Majors: {}",
        p.name,
        p.age_label(),
        p.roles_label(),
        p.nationality_label(),
        p.continent_label(),
        p.club,
        p.major_participations
    )
}
