use async_trait::async_trait;
use chrono::Utc;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use super::{AggregateWrite, GameOrder, LedgerStore, StoreError, Version, VersionedAggregate};
use crate::game::{GameId, GameModel, ValidatedGame};
use crate::player::{PlayerId, PlayerModel};

struct VersionedDoc {
    player: PlayerModel,
    version: Version,
}

#[derive(Default)]
struct StoreInner {
    players: HashMap<PlayerId, VersionedDoc>,
    /// Insertion order doubles as `created_at` order, which keeps
    /// same-period tie-breaks stable.
    games: Vec<GameModel>,
}

/// In-memory implementation of `LedgerStore` for development and testing.
///
/// A single mutex guards both collections, so a commit is atomic: no
/// reader can observe the game without its aggregate writes or vice
/// versa. Conflict detection mirrors an optimistic document store by
/// keeping a revision counter per player document.
pub struct InMemoryLedgerStore {
    inner: Mutex<StoreInner>,
}

impl Default for InMemoryLedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLedgerStore {
    /// Creates a new empty in-memory store
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner::default()),
        }
    }
}

#[async_trait]
impl LedgerStore for InMemoryLedgerStore {
    #[instrument(skip(self))]
    async fn create_player(&self, name: &str) -> Result<PlayerModel, StoreError> {
        let mut inner = self.inner.lock().unwrap();

        if inner.players.values().any(|doc| doc.player.name == name) {
            warn!(player_name = %name, "Player name already taken");
            return Err(StoreError::DuplicateName(name.to_string()));
        }

        let player = PlayerModel::new(name);
        inner.players.insert(
            player.id.clone(),
            VersionedDoc {
                player: player.clone(),
                version: 0,
            },
        );

        info!(player_id = %player.id, player_name = %name, "Player provisioned");
        Ok(player)
    }

    #[instrument(skip(self))]
    async fn list_players(&self) -> Result<Vec<PlayerModel>, StoreError> {
        let inner = self.inner.lock().unwrap();
        let mut players: Vec<PlayerModel> =
            inner.players.values().map(|doc| doc.player.clone()).collect();
        players.sort_by(|a, b| a.name.cmp(&b.name));

        debug!(player_count = players.len(), "Players listed");
        Ok(players)
    }

    #[instrument(skip(self))]
    async fn get_player(&self, id: &PlayerId) -> Result<Option<PlayerModel>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.players.get(id).map(|doc| doc.player.clone()))
    }

    #[instrument(skip(self, ids))]
    async fn snapshot_players(
        &self,
        ids: &[PlayerId],
    ) -> Result<Vec<VersionedAggregate>, StoreError> {
        let inner = self.inner.lock().unwrap();

        let mut snapshots = Vec::with_capacity(ids.len());
        for id in ids {
            let doc = inner
                .players
                .get(id)
                .ok_or_else(|| StoreError::MissingPlayer(id.clone()))?;
            snapshots.push(VersionedAggregate {
                player: doc.player.clone(),
                version: doc.version,
            });
        }

        debug!(snapshot_count = snapshots.len(), "Player snapshots read");
        Ok(snapshots)
    }

    #[instrument(skip(self, game, writes), fields(title = %game.title, period = %game.period))]
    async fn commit_game(
        &self,
        game: ValidatedGame,
        writes: Vec<AggregateWrite>,
    ) -> Result<GameModel, StoreError> {
        let mut inner = self.inner.lock().unwrap();

        // Validate the whole write-set before touching anything, so a
        // failed commit leaves no partial state behind.
        for write in &writes {
            let doc = inner
                .players
                .get(&write.player_id)
                .ok_or_else(|| StoreError::MissingPlayer(write.player_id.clone()))?;
            if doc.version != write.expected_version {
                debug!(
                    player_id = %write.player_id,
                    expected = write.expected_version,
                    current = doc.version,
                    "Stale aggregate write rejected"
                );
                return Err(StoreError::Conflict(write.player_id.clone()));
            }
        }

        let record = GameModel {
            id: GameId::generate(),
            title: game.title,
            game_date: game.period,
            created_at: Utc::now(),
            game_mode: game.mode,
            results: game.results,
        };

        for write in writes {
            // Presence was checked above; the lock has not been released.
            let doc = inner.players.get_mut(&write.player_id).unwrap();
            doc.player.aggregate = write.aggregate;
            doc.version += 1;
        }
        inner.games.push(record.clone());

        info!(
            game_id = %record.id,
            period = %record.game_date,
            seats = record.results.len(),
            "Game committed"
        );
        Ok(record)
    }

    #[instrument(skip(self))]
    async fn list_games(&self, order: GameOrder) -> Result<Vec<GameModel>, StoreError> {
        let inner = self.inner.lock().unwrap();

        let games = match order {
            GameOrder::Chronological => {
                let mut games: Vec<GameModel> = inner.games.clone();
                // Stable sort: insertion order resolves ties within a period
                games.sort_by_key(|g| g.game_date);
                games
            }
            GameOrder::PeriodDesc => {
                let mut games: Vec<GameModel> = inner.games.iter().rev().cloned().collect();
                // Reversed first, so the stable sort keeps newest-first
                // within each period
                games.sort_by_key(|g| Reverse(g.game_date));
                games
            }
        };

        debug!(game_count = games.len(), ?order, "Games listed");
        Ok(games)
    }
}
