use serde::{Deserialize, Serialize};
use std::fmt;

use crate::game::Rank;

/// Unique identifier for a roster member
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PlayerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// How many times a player finished in each position.
///
/// Serialized with the ordinal keys the ledger documents use
/// ("1st".."5th"). Invariant: `total() == game_count` of the owning
/// aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RankCounts {
    #[serde(rename = "1st")]
    pub first: u32,
    #[serde(rename = "2nd")]
    pub second: u32,
    #[serde(rename = "3rd")]
    pub third: u32,
    #[serde(rename = "4th")]
    pub fourth: u32,
    #[serde(rename = "5th")]
    pub fifth: u32,
}

impl RankCounts {
    pub fn get(&self, rank: Rank) -> u32 {
        match rank.get() {
            1 => self.first,
            2 => self.second,
            3 => self.third,
            4 => self.fourth,
            _ => self.fifth,
        }
    }

    /// Returns a copy with the bucket for `rank` incremented by one
    pub fn incremented(mut self, rank: Rank) -> Self {
        match rank.get() {
            1 => self.first += 1,
            2 => self.second += 1,
            3 => self.third += 1,
            4 => self.fourth += 1,
            _ => self.fifth += 1,
        }
        self
    }

    pub fn total(&self) -> u32 {
        self.first + self.second + self.third + self.fourth + self.fifth
    }
}

/// A player's running derived statistics across all recorded games.
///
/// Only the recorder transaction ever writes these fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAggregate {
    pub total_score: i64,
    pub game_count: u32,
    pub average_rank: f64,
    pub rank_counts: RankCounts,
}

/// A roster member together with their aggregate statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerModel {
    pub id: PlayerId,
    pub name: String,
    #[serde(flatten)]
    pub aggregate: PlayerAggregate,
}

impl PlayerModel {
    /// Creates a freshly provisioned player with empty statistics
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::generate(),
            name: name.into(),
            aggregate: PlayerAggregate::default(),
        }
    }
}
