use thiserror::Error;

use crate::player::PlayerId;
use crate::store::StoreError;

/// A user-correctable problem with a submitted draft.
///
/// One variant per check; validation never touches the store, so a
/// rejection has no side effects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("game period must be set")]
    MissingPeriod,

    #[error("player {player_id} appears more than once in the submission")]
    DuplicatePlayer { player_id: PlayerId },

    #[error("expected {expected} seated players, found {found}")]
    SeatedCountMismatch { expected: usize, found: usize },

    #[error("expected {expected} observers, found {found}")]
    ObserverCountMismatch { expected: usize, found: usize },

    #[error("rank {rank} is out of range for a {seats}-player game")]
    RankOutOfRange { rank: u8, seats: usize },

    #[error("rank {rank} is assigned more than once")]
    DuplicateRank { rank: u8 },

    #[error("player {player_id} is seated without a score")]
    MissingScore { player_id: PlayerId },

    #[error("scores must sum to zero, got {sum:+}")]
    NonZeroScoreSum { sum: i64 },
}

/// Outcome taxonomy for a recording attempt.
///
/// `Rejected` is the caller's to fix, `MissingPlayer` and
/// `RosterMismatch` both mean the caller submitted against a stale
/// roster, `Contention` is transient and only surfaced after the bounded
/// retries are exhausted, and `Store` wraps infrastructure failures with
/// their cause.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("invalid submission: {0}")]
    Rejected(#[from] ValidationError),

    #[error("player {0} does not exist")]
    MissingPlayer(PlayerId),

    #[error("roster player {0} has no entry in the submission")]
    RosterMismatch(PlayerId),

    #[error("conflicting concurrent submissions, gave up after {attempts} attempts")]
    Contention { attempts: u32 },

    #[error("store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for RecordError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MissingPlayer(id) => RecordError::MissingPlayer(id),
            other => RecordError::Store(other),
        }
    }
}
