use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::event::EventBus;
use crate::ledger::{GameRecorder, RecordError};
use crate::store::{LedgerStore, StoreError};
use crate::views::ViewService;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn LedgerStore>,
    pub recorder: Arc<GameRecorder>,
    pub views: Arc<ViewService>,
    pub event_bus: EventBus,
}

impl AppState {
    /// Wires the standard service graph over the given store
    pub fn new(store: Arc<dyn LedgerStore>, event_bus: EventBus) -> Self {
        Self {
            recorder: Arc::new(GameRecorder::new(store.clone(), event_bus.clone())),
            views: Arc::new(ViewService::new(store.clone())),
            store,
            event_bus,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("service unavailable: {0}")]
    Unavailable(String),

    #[error("store error: {0}")]
    Store(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateName(_) | StoreError::Conflict(_) => {
                AppError::Conflict(err.to_string())
            }
            StoreError::MissingPlayer(_) => AppError::NotFound(err.to_string()),
            StoreError::Unavailable(cause) => AppError::Unavailable(cause),
        }
    }
}

impl From<RecordError> for AppError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::Rejected(reason) => AppError::Validation(reason.to_string()),
            // A stale roster reference is the caller's conflict to
            // resolve, not a missing resource
            RecordError::MissingPlayer(_) | RecordError::RosterMismatch(_) => {
                AppError::Conflict(err.to_string())
            }
            RecordError::Contention { .. } => AppError::Unavailable(err.to_string()),
            RecordError::Store(StoreError::Unavailable(cause)) => AppError::Unavailable(cause),
            RecordError::Store(inner) => AppError::Store(inner.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            AppError::Store(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Store error: {}", msg),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
