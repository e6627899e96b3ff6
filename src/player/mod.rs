// Player roster and per-player aggregate statistics

// Public API
pub use models::{PlayerAggregate, PlayerId, PlayerModel, RankCounts};

pub mod handlers;
pub mod models;
