// Game domain types: recorded sessions and draft submissions

// Public API
pub use models::{
    DraftEntry, GameDraft, GameId, GameMode, GameModel, Period, Rank, SeatDraft, SeatResult,
    ValidatedGame,
};

pub mod models;
