use axum::{extract::State, Json};
use tracing::instrument;

use super::models::{HistoryPage, StandingsRow, TrendSeries};
use crate::shared::{AppError, AppState};

/// HTTP handler for the standings table
///
/// GET /standings
#[instrument(name = "standings", skip(state))]
pub async fn standings(State(state): State<AppState>) -> Result<Json<Vec<StandingsRow>>, AppError> {
    let rows = state.views.standings().await?;
    Ok(Json(rows))
}

/// HTTP handler for the game log
///
/// GET /history
#[instrument(name = "history", skip(state))]
pub async fn history(State(state): State<AppState>) -> Result<Json<HistoryPage>, AppError> {
    let page = state.views.history().await?;
    Ok(Json(page))
}

/// HTTP handler for the cumulative score trend
///
/// GET /trend
#[instrument(name = "trend", skip(state))]
pub async fn trend(State(state): State<AppState>) -> Result<Json<TrendSeries>, AppError> {
    let series = state.views.trend().await?;
    Ok(Json(series))
}
