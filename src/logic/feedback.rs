//! Feedback comparator: guess vs secret, attribute by attribute.

use crate::models::{Attribute, AttributeFeedback, Feedback, PlayerRecord, RoleSet, Verdict};
use std::cmp::Ordering;

/// Compare a guessed player against the secret.
///
/// Attributes are reported in `Attribute::ORDER`. `is_win` holds iff every verdict is `Exact`.
pub fn compare(guess: &PlayerRecord, secret: &PlayerRecord) -> Feedback {
    let attributes: Vec<AttributeFeedback> = Attribute::ORDER
        .into_iter()
        .map(|attribute| {
            let (verdict, guessed_value) = match attribute {
                Attribute::Age => (compare_numeric(guess.age, secret.age), guess.age_label()),
                Attribute::Role => (compare_roles(&guess.roles, &secret.roles), guess.roles_label()),
                Attribute::Nationality => (
                    compare_eq(&guess.nationality, &secret.nationality),
                    guess.nationality_label().to_string(),
                ),
                Attribute::Continent => (
                    compare_eq(&guess.continent, &secret.continent),
                    guess.continent_label().to_string(),
                ),
                Attribute::Club => (compare_eq(&guess.club, &secret.club), guess.club.clone()),
                Attribute::MajorParticipations => (
                    compare_numeric(Some(guess.major_participations), Some(secret.major_participations)),
                    guess.major_participations.to_string(),
                ),
            };
            AttributeFeedback {
                attribute,
                verdict,
                guessed_value,
            }
        })
        .collect();

    let is_win = attributes.iter().all(|a| a.verdict == Verdict::Exact);
    Feedback {
        guessed_name: guess.name.clone(),
        attributes,
        is_win,
    }
}

/// Equal values are `Exact`; otherwise the direction of the secret relative to the guess.
/// Unknown only equals unknown.
fn compare_numeric(guess: Option<u32>, secret: Option<u32>) -> Verdict {
    match (guess, secret) {
        (None, None) => Verdict::Exact,
        (Some(g), Some(s)) => match s.cmp(&g) {
            Ordering::Equal => Verdict::Exact,
            Ordering::Greater => Verdict::Higher,
            Ordering::Less => Verdict::Lower,
        },
        _ => Verdict::Mismatch,
    }
}

fn compare_roles(guess: &RoleSet, secret: &RoleSet) -> Verdict {
    if guess == secret {
        Verdict::Exact
    } else if guess.intersection(secret).next().is_some() {
        Verdict::PartialMatch
    } else {
        Verdict::Mismatch
    }
}

fn compare_eq<T: PartialEq>(guess: &T, secret: &T) -> Verdict {
    if guess == secret {
        Verdict::Exact
    } else {
        Verdict::Mismatch
    }
}
