use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::game::{GameId, GameModel};
use crate::player::{PlayerId, PlayerModel};

/// One row of the standings table: a 1-based position plus the player's
/// document as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRow {
    pub position: usize,
    #[serde(flatten)]
    pub player: PlayerModel,
}

/// Roster reference shared by the history and trend payloads so
/// consumers can resolve result player ids to display names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub id: PlayerId,
    pub name: String,
}

impl From<PlayerModel> for RosterEntry {
    fn from(player: PlayerModel) -> Self {
        Self {
            id: player.id,
            name: player.name,
        }
    }
}

/// The chronological game log, newest period first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPage {
    /// Name-ascending, matching the standings column order
    pub roster: Vec<RosterEntry>,
    pub games: Vec<GameModel>,
}

/// One sample of the cumulative score series.
///
/// The first point is a synthetic zero baseline (`game_id` is `None`);
/// every later point corresponds to one recorded game and carries each
/// roster member's cumulative score after that game, observers included
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub game_id: Option<GameId>,
    pub title: Option<String>,
    pub scores: HashMap<PlayerId, i64>,
}

/// Cumulative per-player score trend in recording order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSeries {
    pub roster: Vec<RosterEntry>,
    pub points: Vec<TrendPoint>,
}
