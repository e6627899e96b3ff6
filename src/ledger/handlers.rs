use axum::{extract::State, Json};
use tracing::{info, instrument};

use crate::game::{GameDraft, GameModel};
use crate::shared::{AppError, AppState};

/// HTTP handler for submitting a game result
///
/// POST /games
/// Body: a full-roster draft; returns the committed game record
#[instrument(name = "record_game", skip(state, draft), fields(title = %draft.title))]
pub async fn record_game(
    State(state): State<AppState>,
    Json(draft): Json<GameDraft>,
) -> Result<Json<GameModel>, AppError> {
    let record = state.recorder.record(&draft).await?;

    info!(
        game_id = %record.id,
        period = %record.game_date,
        "Game result recorded"
    );

    Ok(Json(record))
}
