use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::aggregate;
use super::errors::RecordError;
use super::validate::validate;
use crate::event::{EventBus, LedgerEvent};
use crate::game::{GameDraft, GameModel};
use crate::player::PlayerId;
use crate::store::{AggregateWrite, LedgerStore, StoreError};

/// How many optimistic commit attempts a single submission gets before
/// contention is surfaced to the caller
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// The transactional write path of the ledger.
///
/// One call to [`GameRecorder::record`] commits exactly one game record
/// and one aggregate update per seated player, or nothing at all.
/// Concurrent submissions are reconciled optimistically: each attempt
/// reads fresh versioned snapshots, computes the new aggregates, and asks
/// the store to commit only if none of the written players changed
/// underneath.
pub struct GameRecorder {
    store: Arc<dyn LedgerStore>,
    event_bus: EventBus,
    max_attempts: u32,
}

impl GameRecorder {
    pub fn new(store: Arc<dyn LedgerStore>, event_bus: EventBus) -> Self {
        Self {
            store,
            event_bus,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the bounded retry count, mainly for tests
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Validates and records one game submission.
    ///
    /// Rejections carry no side effects; an unresolvable player id is a
    /// fatal integrity failure, not a validation problem. Store-level
    /// write conflicts are retried transparently with fresh reads up to
    /// the bounded attempt count.
    #[instrument(skip(self, draft), fields(title = %draft.title, mode = %draft.mode))]
    pub async fn record(&self, draft: &GameDraft) -> Result<GameModel, RecordError> {
        let roster = self.store.list_players().await?;
        let validated = validate(draft, roster.len())?;

        // The draft must assign every roster member exactly once and
        // nobody else; validation already rejected repeated ids, so a
        // set comparison catches both stale-roster directions.
        let mut submitted: HashSet<&PlayerId> =
            draft.entries.iter().map(|entry| &entry.player_id).collect();
        for player in &roster {
            if !submitted.remove(&player.id) {
                return Err(RecordError::RosterMismatch(player.id.clone()));
            }
        }
        if let Some(unknown) = submitted.into_iter().next() {
            return Err(RecordError::MissingPlayer(unknown.clone()));
        }

        // The read-set is the full roster, so a concurrent commit is
        // detected even for players this game only observes.
        let read_set: Vec<PlayerId> = roster.iter().map(|player| player.id.clone()).collect();

        for attempt in 1..=self.max_attempts {
            let snapshots = self.store.snapshot_players(&read_set).await?;
            let by_id: HashMap<&PlayerId, _> = snapshots
                .iter()
                .map(|snap| (&snap.player.id, snap))
                .collect();

            let mut writes = Vec::with_capacity(validated.results.len());
            for seat in &validated.results {
                let snap = by_id
                    .get(&seat.player_id)
                    .ok_or_else(|| RecordError::MissingPlayer(seat.player_id.clone()))?;
                writes.push(AggregateWrite {
                    player_id: seat.player_id.clone(),
                    expected_version: snap.version,
                    aggregate: aggregate::apply(&snap.player.aggregate, seat.rank, seat.score),
                });
            }

            match self.store.commit_game(validated.clone(), writes).await {
                Ok(record) => {
                    info!(
                        game_id = %record.id,
                        period = %record.game_date,
                        attempt,
                        "Game recorded"
                    );
                    self.event_bus.emit(LedgerEvent::GameRecorded {
                        game_id: record.id.clone(),
                        period: record.game_date,
                        mode: record.game_mode,
                    });
                    return Ok(record);
                }
                Err(StoreError::Conflict(player_id)) => {
                    debug!(
                        %player_id,
                        attempt,
                        max_attempts = self.max_attempts,
                        "Commit conflicted, retrying with fresh snapshots"
                    );
                }
                Err(err) => return Err(err.into()),
            }
        }

        warn!(
            attempts = self.max_attempts,
            "Submission abandoned after repeated write conflicts"
        );
        Err(RecordError::Contention {
            attempts: self.max_attempts,
        })
    }
}
