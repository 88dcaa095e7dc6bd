use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{Fixture, MatchResult};

#[derive(Debug, Serialize)]
pub struct MatchLogResponse {
    /// Completed matches, newest first.
    pub results: Vec<MatchResult>,
    pub next_fixture: Option<Fixture>,
    pub played: usize,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct PlayResponse {
    pub result: MatchResult,
    pub remaining: usize,
    pub league_complete: bool,
}

/// The result log plus the upcoming fixture.
pub async fn match_log(State(state): State<AppState>) -> Result<Json<MatchLogResponse>, ApiError> {
    let guard = state.session.read().await;
    let session = guard
        .as_ref()
        .ok_or_else(|| ApiError::NotFound("no tournament session; upload a roster".to_string()))?;

    let mut results = session.results().to_vec();
    results.reverse();

    Ok(Json(MatchLogResponse {
        next_fixture: session.next_fixture().cloned(),
        played: session.results().len(),
        total: session.fixtures().len(),
        results,
    }))
}

/// Play the next league match. 409 once every fixture has a result.
pub async fn play_next(State(state): State<AppState>) -> Result<Json<PlayResponse>, ApiError> {
    let mut guard = state.session.write().await;
    let session = guard
        .as_mut()
        .ok_or_else(|| ApiError::NotFound("no tournament session; upload a roster".to_string()))?;

    let result = session.play_next_match()?;
    Ok(Json(PlayResponse {
        result,
        remaining: session.fixtures().len() - session.results().len(),
        league_complete: session.league_complete(),
    }))
}
