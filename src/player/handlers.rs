use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::{PlayerId, PlayerModel};
use crate::event::LedgerEvent;
use crate::shared::{AppError, AppState};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlayerRequest {
    pub name: String,
}

/// HTTP handler for provisioning a roster member
///
/// POST /players
#[instrument(name = "create_player", skip(state))]
pub async fn create_player(
    State(state): State<AppState>,
    Json(request): Json<CreatePlayerRequest>,
) -> Result<Json<PlayerModel>, AppError> {
    if request.name.is_empty() {
        return Err(AppError::Validation("player name must not be empty".to_string()));
    }

    let player = state.store.create_player(&request.name).await?;

    state.event_bus.emit(LedgerEvent::PlayerCreated {
        player_id: player.id.clone(),
        name: player.name.clone(),
    });

    info!(player_id = %player.id, player_name = %player.name, "Player created");
    Ok(Json(player))
}

/// HTTP handler for listing the roster, name ascending
///
/// GET /players
#[instrument(name = "list_players", skip(state))]
pub async fn list_players(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlayerModel>>, AppError> {
    let players = state.store.list_players().await?;
    Ok(Json(players))
}

/// HTTP handler for fetching a single roster member
///
/// GET /players/:id
#[instrument(name = "get_player", skip(state))]
pub async fn get_player(
    State(state): State<AppState>,
    Path(player_id): Path<PlayerId>,
) -> Result<Json<PlayerModel>, AppError> {
    let player = state
        .store
        .get_player(&player_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("player {} does not exist", player_id)))?;
    Ok(Json(player))
}
