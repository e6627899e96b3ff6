mod event;
mod game;
mod ledger;
mod player;
mod shared;
mod store;
mod views;

use axum::{
    routing::{get, post},
    Router,
};
use shared::AppState;
use std::sync::Arc;
use store::InMemoryLedgerStore;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "janlog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting mahjong score ledger server");

    // The store is an opaque transactional document collaborator; the
    // in-memory implementation is the one shipped here
    let ledger_store = Arc::new(InMemoryLedgerStore::new());
    let event_bus = event::EventBus::new(1000);
    let app_state = AppState::new(ledger_store, event_bus);

    let app = Router::new()
        .route(
            "/players",
            get(player::handlers::list_players).post(player::handlers::create_player),
        )
        .route("/players/:id", get(player::handlers::get_player))
        .route("/games", post(ledger::handlers::record_game))
        .route("/standings", get(views::handlers::standings))
        .route("/history", get(views::handlers::history))
        .route("/trend", get(views::handlers::trend))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000")
        .await
        .expect("failed to bind port 3000");
    info!("Server running on http://localhost:3000");
    axum::serve(listener, app).await.expect("server error");
}
