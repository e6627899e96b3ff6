// Persistence abstraction: a document store with optimistic-concurrency
// transactions over the `players` and `games` collections.
//
// The core depends only on versioned reads, an atomic commit, and ordered
// queries; the wire protocol of any real backend stays out of scope.

// Public API
pub use memory::InMemoryLedgerStore;

pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::game::{GameModel, ValidatedGame};
use crate::player::{PlayerAggregate, PlayerId, PlayerModel};

/// Monotonic per-document revision counter used for conflict detection
pub type Version = u64;

/// A player document together with the revision it was read at
#[derive(Debug, Clone, PartialEq)]
pub struct VersionedAggregate {
    pub player: PlayerModel,
    pub version: Version,
}

/// A staged aggregate update, committed only if the player document is
/// still at `expected_version`
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateWrite {
    pub player_id: PlayerId,
    pub expected_version: Version,
    pub aggregate: PlayerAggregate,
}

/// Orderings the store must serve for the `games` collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOrder {
    /// Newest period first, newest `created_at` first within a period
    PeriodDesc,
    /// Oldest period first, oldest `created_at` first within a period
    Chronological,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("player {0} does not exist")]
    MissingPlayer(PlayerId),

    #[error("concurrent update detected on player {0}")]
    Conflict(PlayerId),

    #[error("a player named {0:?} already exists")]
    DuplicateName(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Trait for the transactional ledger store
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Provisions a new player with empty statistics; names are unique
    async fn create_player(&self, name: &str) -> Result<PlayerModel, StoreError>;

    /// All players, ordered by name ascending
    async fn list_players(&self) -> Result<Vec<PlayerModel>, StoreError>;

    /// Looks up a single player, `None` if the id does not resolve
    async fn get_player(&self, id: &PlayerId) -> Result<Option<PlayerModel>, StoreError>;

    /// Reads a consistent versioned snapshot of the given players.
    ///
    /// Errors with `MissingPlayer` if any id does not resolve; the
    /// returned snapshots preserve the requested order.
    async fn snapshot_players(
        &self,
        ids: &[PlayerId],
    ) -> Result<Vec<VersionedAggregate>, StoreError>;

    /// Atomically commits one game record plus the staged aggregate
    /// writes.
    ///
    /// Every write's `expected_version` is checked against the current
    /// document revision; any mismatch aborts the whole commit with
    /// `Conflict` and nothing becomes visible. The store assigns the game
    /// id and `created_at` from its own clock.
    async fn commit_game(
        &self,
        game: ValidatedGame,
        writes: Vec<AggregateWrite>,
    ) -> Result<GameModel, StoreError>;

    /// All games in the requested order
    async fn list_games(&self, order: GameOrder) -> Result<Vec<GameModel>, StoreError>;
}
