// Read-only derived projections: standings, history, and score trend

// Public API
pub use models::{HistoryPage, RosterEntry, StandingsRow, TrendPoint, TrendSeries};
pub use service::ViewService;

pub mod handlers;
pub mod models;

mod service;
