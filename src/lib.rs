// Library crate for the mahjong score ledger server
// This file exposes the public API for integration tests

pub mod event;
pub mod game;
pub mod ledger;
pub mod player;
pub mod shared;
pub mod store;
pub mod views;

// Re-export commonly used types for easier access in tests
pub use event::{EventBus, LedgerEvent};
pub use game::{DraftEntry, GameDraft, GameMode, GameModel, Period, Rank, SeatDraft};
pub use ledger::{GameRecorder, RecordError, ValidationError};
pub use player::{PlayerAggregate, PlayerId, PlayerModel, RankCounts};
pub use shared::{AppError, AppState};
pub use store::{InMemoryLedgerStore, LedgerStore, StoreError};
pub use views::ViewService;
