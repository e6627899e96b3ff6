use serde::{Deserialize, Serialize};

use crate::game::{GameId, GameMode, Period};
use crate::player::PlayerId;

/// Change notifications emitted by the ledger.
///
/// Events are facts about committed state. Views stay pull-based;
/// subscribers use these purely as an invalidation signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LedgerEvent {
    /// A new player was provisioned into the roster
    PlayerCreated { player_id: PlayerId, name: String },

    /// A game and all participant aggregates were durably committed
    GameRecorded {
        game_id: GameId,
        period: Period,
        mode: GameMode,
    },
}

impl LedgerEvent {
    /// Get a human-readable description of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            LedgerEvent::PlayerCreated { .. } => "player_created",
            LedgerEvent::GameRecorded { .. } => "game_recorded",
        }
    }
}
