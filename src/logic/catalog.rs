//! Player catalog: loaded records plus the normalized-name index.

use crate::models::{normalize_name, GameError, PlayerRecord};
use std::collections::HashMap;
use std::sync::Arc;

/// Read-only collection of players. Unavailable until `load` brings in at least one player.
#[derive(Clone, Debug, Default)]
pub struct PlayerCatalog {
    players: Option<Vec<Arc<PlayerRecord>>>,
    /// Normalized name -> index into `players`. Later records win on collision.
    by_name: HashMap<String, usize>,
}

impl PlayerCatalog {
    /// An unloaded catalog; every query fails with `CatalogUnavailable`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a loaded catalog from records.
    pub fn from_records(records: Vec<PlayerRecord>) -> Self {
        let mut catalog = Self::new();
        catalog.load(records);
        catalog
    }

    /// Replace the catalog wholesale and rebuild the name index. Records without a name are skipped.
    pub fn load(&mut self, records: Vec<PlayerRecord>) {
        let total = records.len();
        let players: Vec<Arc<PlayerRecord>> = records
            .into_iter()
            .filter(|p| !p.name.trim().is_empty())
            .map(Arc::new)
            .collect();
        if players.len() < total {
            log::warn!("Skipped {} player record(s) without a name", total - players.len());
        }
        let mut by_name = HashMap::with_capacity(players.len());
        for (idx, p) in players.iter().enumerate() {
            if let Some(prev) = by_name.insert(p.normalized_name(), idx) {
                log::warn!(
                    "Players \"{}\" and \"{}\" share a normalized name; keeping the latter",
                    players[prev].name,
                    p.name
                );
            }
        }
        self.players = Some(players);
        self.by_name = by_name;
    }

    /// An empty load counts as unavailable, same as no load at all.
    pub fn is_loaded(&self) -> bool {
        self.players.as_ref().is_some_and(|p| !p.is_empty())
    }

    /// All players, in load order.
    pub fn all(&self) -> Result<&[Arc<PlayerRecord>], GameError> {
        self.players
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or(GameError::CatalogUnavailable)
    }

    /// Find a player by raw guess text (case and 0/o, 1/i insensitive).
    pub fn lookup(&self, raw: &str) -> Result<Option<Arc<PlayerRecord>>, GameError> {
        let players = self.all()?;
        let key = normalize_name(raw);
        Ok(self.by_name.get(&key).map(|&idx| Arc::clone(&players[idx])))
    }

    pub fn len(&self) -> usize {
        self.players.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
