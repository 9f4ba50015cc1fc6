//! Difficulty pools: which players may be drawn as the secret for each difficulty.

use crate::logic::catalog::PlayerCatalog;
use crate::models::{normalize_name, Difficulty, GameError, PlayerRecord, NO_CLUB};
use std::collections::HashSet;
use std::sync::Arc;

/// Default rank cutoff for the "top clubs" set.
pub const DEFAULT_TOP_CLUB_CUTOFF: u32 = 30;

/// Default number of majors a retired player must exceed to join the advanced pool.
pub const DEFAULT_RETIRED_MAJORS_THRESHOLD: u32 = 6;

/// Inputs for pool selection besides the catalog itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Club names eligible for the normal pool.
    pub top_clubs: HashSet<String>,
    /// Normalized names of players always included in the normal pool.
    pub always_include: HashSet<String>,
    /// Club value marking retired / clubless players.
    pub retired_club: String,
    pub retired_majors_threshold: u32,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            top_clubs: HashSet::new(),
            always_include: HashSet::new(),
            retired_club: NO_CLUB.to_string(),
            retired_majors_threshold: DEFAULT_RETIRED_MAJORS_THRESHOLD,
        }
    }
}

impl PoolConfig {
    /// Set the top clubs from `(club, rank)` pairs, keeping ranks `<= cutoff`.
    pub fn with_rankings<I, S>(mut self, rankings: I, cutoff: u32) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        self.top_clubs = top_clubs(rankings, cutoff);
        self
    }

    /// Add player names that every normal pool must contain.
    pub fn with_always_include<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.always_include
            .extend(names.into_iter().map(|n| normalize_name(n.as_ref())));
        self
    }

    pub fn with_retired_majors_threshold(mut self, threshold: u32) -> Self {
        self.retired_majors_threshold = threshold;
        self
    }

    fn in_normal_pool(&self, p: &PlayerRecord) -> bool {
        self.top_clubs.contains(&p.club) || self.always_include.contains(&p.normalized_name())
    }

    fn is_retired_veteran(&self, p: &PlayerRecord) -> bool {
        p.club == self.retired_club && p.major_participations > self.retired_majors_threshold
    }
}

/// Club names whose rank is within the cutoff.
pub fn top_clubs<I, S>(rankings: I, cutoff: u32) -> HashSet<String>
where
    I: IntoIterator<Item = (S, u32)>,
    S: Into<String>,
{
    rankings
        .into_iter()
        .filter(|(_, rank)| *rank <= cutoff)
        .map(|(club, _)| club.into())
        .collect()
}

/// Players eligible as the secret for `difficulty`, in catalog order.
///
/// - normal: top clubs plus the allowlist.
/// - advanced: normal plus retired players with more majors than the threshold.
/// - hard: the whole catalog.
pub fn pool_for(
    difficulty: Difficulty,
    catalog: &PlayerCatalog,
    config: &PoolConfig,
) -> Result<Vec<Arc<PlayerRecord>>, GameError> {
    let all = catalog.all()?;
    let pool: Vec<Arc<PlayerRecord>> = match difficulty {
        Difficulty::Normal => all
            .iter()
            .filter(|p| config.in_normal_pool(p))
            .cloned()
            .collect(),
        Difficulty::Advanced => all
            .iter()
            .filter(|p| config.in_normal_pool(p) || config.is_retired_veteran(p))
            .cloned()
            .collect(),
        Difficulty::Hard => all.to_vec(),
    };
    if pool.is_empty() {
        return Err(GameError::EmptyPool);
    }
    Ok(pool)
}
