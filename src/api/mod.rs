//! REST API endpoints.
//!
//! Axum-based HTTP API for the renderer: read-only views of the balance
//! report, schedule, result log, standings and playoff bracket, plus the two
//! mutating trigger actions (play next league match, advance playoff stage).

pub mod routes;
pub mod state;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::session::SessionError;
use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            // Triggers outside their precondition are caller errors.
            SessionError::LeagueComplete(_) | SessionError::LeagueIncomplete { .. } => {
                ApiError::Conflict(err.to_string())
            }
            SessionError::NotEnoughTeams { .. } => ApiError::BadRequest(err.to_string()),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Assemble the API router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/roster", post(routes::roster::upload_roster))
        .route("/api/balance", get(routes::roster::balance_report))
        .route("/api/schedule", get(routes::schedule::schedule))
        .route("/api/matches", get(routes::matches::match_log))
        .route("/api/matches/next", post(routes::matches::play_next))
        .route("/api/standings", get(routes::standings::standings))
        .route("/api/playoffs", get(routes::playoffs::bracket))
        .route("/api/playoffs/advance", post(routes::playoffs::advance))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
