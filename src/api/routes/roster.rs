use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::engine::{EntropySource, RandomSource, SeededSource};
use crate::ingest;
use crate::models::TeamBalance;
use crate::session::TournamentSession;

#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub teams: Vec<TeamBalance>,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub session_id: String,
    pub fixtures: usize,
    pub teams: Vec<TeamBalance>,
}

/// Upload a squad CSV and start a fresh tournament session. Replaces any
/// existing session.
pub async fn upload_roster(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<UploadResponse>, ApiError> {
    let players = ingest::parse_roster(body.as_bytes())
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let rng: Box<dyn RandomSource> = match state.seed {
        Some(seed) => Box::new(SeededSource::new(seed)),
        None => Box::new(EntropySource::default()),
    };
    let session = TournamentSession::new(&players, state.start_date, rng)?;

    let response = UploadResponse {
        session_id: session.id().to_string(),
        fixtures: session.fixtures().len(),
        teams: session.balance_report().to_vec(),
    };
    *state.session.write().await = Some(session);
    Ok(Json(response))
}

/// The team balance report for the current session.
pub async fn balance_report(
    State(state): State<AppState>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let guard = state.session.read().await;
    let session = guard
        .as_ref()
        .ok_or_else(|| ApiError::NotFound("no tournament session; upload a roster".to_string()))?;

    Ok(Json(BalanceResponse {
        teams: session.balance_report().to_vec(),
    }))
}
