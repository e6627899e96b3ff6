use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::player::PlayerId;

/// Unique identifier for a recorded game
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    /// Generates a fresh random id for a newly committed game
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for GameId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Seat count for a session: four-player or five-player mahjong
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GameMode {
    Four,
    Five,
}

impl GameMode {
    /// Number of seated players in this mode
    pub fn seats(self) -> usize {
        match self {
            GameMode::Four => 4,
            GameMode::Five => 5,
        }
    }

    /// Highest valid rank in this mode
    pub fn max_rank(self) -> u8 {
        self.seats() as u8
    }
}

impl TryFrom<u8> for GameMode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(GameMode::Four),
            5 => Ok(GameMode::Five),
            other => Err(format!("game mode must be 4 or 5, got {}", other)),
        }
    }
}

impl From<GameMode> for u8 {
    fn from(mode: GameMode) -> Self {
        mode.seats() as u8
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.seats())
    }
}

/// A finishing position within a game.
///
/// Valid positions are 1 through 5; constructing a `Rank` proves range
/// validity, which keeps the aggregation step total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Option<Self> {
        (1..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or_else(|| format!("rank must be between 1 and {}, got {}", Rank::MAX, value))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Year-month period a game belongs to, e.g. "2024-05".
///
/// Games are grouped and ordered by period for display; `created_at`
/// breaks ties within a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    year: u16,
    month: u8,
}

impl Period {
    pub fn new(year: u16, month: u8) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn year(self) -> u16 {
        self.year
    }

    pub fn month(self) -> u8 {
        self.month
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| format!("period must be YYYY-MM, got {:?}", s))?;
        let year: u16 = year
            .parse()
            .map_err(|_| format!("invalid year in period {:?}", s))?;
        let month: u8 = month
            .parse()
            .map_err(|_| format!("invalid month in period {:?}", s))?;
        Period::new(year, month).ok_or_else(|| format!("month out of range in period {:?}", s))
    }
}

impl TryFrom<String> for Period {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.to_string()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// One seated player's outcome in a recorded game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatResult {
    pub player_id: PlayerId,
    pub rank: Rank,
    pub score: i64,
}

/// An immutable recorded game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameModel {
    pub id: GameId,
    pub title: String,
    pub game_date: Period,
    pub created_at: DateTime<Utc>,
    pub game_mode: GameMode,
    /// Exactly `game_mode.seats()` entries; observers are never stored
    pub results: Vec<SeatResult>,
}

impl GameModel {
    /// Looks up a player's seat in this game, `None` for observers
    pub fn result_for(&self, player_id: &PlayerId) -> Option<&SeatResult> {
        self.results.iter().find(|r| &r.player_id == player_id)
    }
}

/// Seat assignment for one roster member in a draft submission.
///
/// An explicit tagged state per slot: nothing selected yet, sitting out,
/// or seated with a rank and (possibly still missing) score. Raw `u8`
/// ranks here because out-of-range input is the validator's job to reject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SeatDraft {
    Pending,
    Observing,
    Ranked { rank: u8, score: Option<i64> },
}

/// One roster member's slot in a draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftEntry {
    pub player_id: PlayerId,
    pub seat: SeatDraft,
}

/// A candidate game submission covering the full roster.
///
/// This is the explicit submission state callers build and hand to the
/// recorder; every roster member appears exactly once, either seated or
/// observing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDraft {
    pub title: String,
    pub period: Option<Period>,
    pub mode: GameMode,
    pub entries: Vec<DraftEntry>,
}

/// A draft that passed validation: observers stripped, ranks proven in
/// range, scores present and zero-sum. Ready for an atomic commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedGame {
    pub title: String,
    pub period: Period,
    pub mode: GameMode,
    pub results: Vec<SeatResult>,
}
