//! Per-attribute verdicts produced by the comparator.

use serde::{Deserialize, Serialize};

/// Compared attribute, in the order feedback is reported.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Age,
    Role,
    Nationality,
    Continent,
    Club,
    MajorParticipations,
}

impl Attribute {
    pub const ORDER: [Attribute; 6] = [
        Attribute::Age,
        Attribute::Role,
        Attribute::Nationality,
        Attribute::Continent,
        Attribute::Club,
        Attribute::MajorParticipations,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Attribute::Age => "Age",
            Attribute::Role => "Role",
            Attribute::Nationality => "Nationality",
            Attribute::Continent => "Continent",
            Attribute::Club => "Club",
            Attribute::MajorParticipations => "Majors",
        }
    }
}

/// Outcome of comparing one attribute of the guess against the secret.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Exact,
    /// The secret's value is greater than the guess.
    Higher,
    /// The secret's value is smaller than the guess.
    Lower,
    PartialMatch,
    Mismatch,
}

impl Verdict {
    pub fn symbol(&self) -> &'static str {
        match self {
            Verdict::Exact => "√",
            Verdict::Higher => "↑",
            Verdict::Lower => "↓",
            Verdict::PartialMatch => "O",
            Verdict::Mismatch => "×",
        }
    }
}

/// One attribute verdict plus the guessed player's value for display.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct AttributeFeedback {
    pub attribute: Attribute,
    pub verdict: Verdict,
    pub guessed_value: String,
}

/// Full comparator result.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub guessed_name: String,
    pub attributes: Vec<AttributeFeedback>,
    pub is_win: bool,
}

impl Feedback {
    pub fn verdict(&self, attribute: Attribute) -> Option<Verdict> {
        self.attributes
            .iter()
            .find(|a| a.attribute == attribute)
            .map(|a| a.verdict)
    }
}
