//! Loading the scraped dataset: players JSON and club rankings CSV.

use crate::models::{PlayerRecord, Role, RoleSet, NO_CLUB};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// Errors while reading dataset files.
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "I/O error: {}", e),
            LoadError::Json(e) => write!(f, "Invalid players JSON: {}", e),
            LoadError::Csv(e) => write!(f, "Invalid rankings CSV: {}", e),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Json(e)
    }
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        LoadError::Csv(e)
    }
}

/// Player entry as written by the scraper.
#[derive(Debug, Deserialize)]
struct RawPlayer {
    #[serde(default)]
    name: String,
    #[serde(default)]
    age: Option<u32>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    nationality: Option<String>,
    #[serde(default)]
    continent: Option<String>,
    #[serde(default)]
    club: Option<String>,
    #[serde(default)]
    major_participations: u32,
}

impl RawPlayer {
    fn into_record(self) -> PlayerRecord {
        PlayerRecord {
            name: self.name.trim().to_string(),
            age: self.age,
            roles: self.role.as_deref().map(parse_roles).unwrap_or_default(),
            nationality: known(self.nationality),
            continent: known(self.continent),
            club: known(self.club).unwrap_or_else(|| NO_CLUB.to_string()),
            major_participations: self.major_participations,
        }
    }
}

/// Treat blank and "Unknown"/"N/A" strings as missing.
fn known(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("unknown") && v != NO_CLUB)
}

/// Split a free-text role ("Rifler/IGL", "AWPer, In-game leader", "Entry & Support") into tags.
pub fn parse_roles(raw: &str) -> RoleSet {
    raw.replace(" and ", "/")
        .split(['/', ',', '&'])
        .filter_map(Role::from_tag)
        .collect()
}

/// Parse a players JSON array. Entries without a name are skipped.
pub fn players_from_reader<R: Read>(reader: R) -> Result<Vec<PlayerRecord>, LoadError> {
    let raw: Vec<RawPlayer> = serde_json::from_reader(reader)?;
    let total = raw.len();
    let players: Vec<PlayerRecord> = raw
        .into_iter()
        .map(RawPlayer::into_record)
        .filter(|p| !p.name.is_empty())
        .collect();
    if players.len() < total {
        log::warn!("Skipped {} player entr(ies) without a name", total - players.len());
    }
    Ok(players)
}

pub fn load_players(path: impl AsRef<Path>) -> Result<Vec<PlayerRecord>, LoadError> {
    let file = std::fs::File::open(path.as_ref())?;
    players_from_reader(std::io::BufReader::new(file))
}

#[derive(Debug, Deserialize)]
struct RankingRow {
    club: String,
    rank: u32,
}

/// Parse `club,rank` rows (with header).
pub fn rankings_from_reader<R: Read>(reader: R) -> Result<Vec<(String, u32)>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut rankings = Vec::new();
    for row in rdr.deserialize::<RankingRow>() {
        let row = row?;
        rankings.push((row.club, row.rank));
    }
    Ok(rankings)
}

pub fn load_rankings(path: impl AsRef<Path>) -> Result<Vec<(String, u32)>, LoadError> {
    let file = std::fs::File::open(path.as_ref())?;
    rankings_from_reader(file)
}
