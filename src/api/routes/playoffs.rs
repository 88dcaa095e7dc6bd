use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{FinalPlacings, PlayoffPhase, StageResult};

#[derive(Debug, Serialize)]
pub struct BracketResponse {
    /// False until the first advance trigger seeds the bracket.
    pub started: bool,
    pub phase: Option<PlayoffPhase>,
    pub seeds: Option<Vec<String>>,
    pub results: Vec<StageResult>,
    pub placings: Option<FinalPlacings>,
}

#[derive(Debug, Serialize)]
pub struct AdvanceResponse {
    /// False when the bracket was already complete (no-op trigger).
    pub advanced: bool,
    pub result: Option<StageResult>,
    pub phase: PlayoffPhase,
    pub placings: Option<FinalPlacings>,
}

/// Current bracket state and, once complete, the final placings.
pub async fn bracket(State(state): State<AppState>) -> Result<Json<BracketResponse>, ApiError> {
    let guard = state.session.read().await;
    let session = guard
        .as_ref()
        .ok_or_else(|| ApiError::NotFound("no tournament session; upload a roster".to_string()))?;

    let response = match session.playoffs() {
        Some(bracket) => BracketResponse {
            started: true,
            phase: Some(bracket.phase()),
            seeds: Some(bracket.seeds().to_vec()),
            results: bracket.results().to_vec(),
            placings: bracket.placings(),
        },
        None => BracketResponse {
            started: false,
            phase: None,
            seeds: None,
            results: Vec::new(),
            placings: None,
        },
    };
    Ok(Json(response))
}

/// Advance the bracket by one stage. 409 while league fixtures remain;
/// a no-op response once the bracket is complete.
pub async fn advance(State(state): State<AppState>) -> Result<Json<AdvanceResponse>, ApiError> {
    let mut guard = state.session.write().await;
    let session = guard
        .as_mut()
        .ok_or_else(|| ApiError::NotFound("no tournament session; upload a roster".to_string()))?;

    let result = session.advance_playoffs()?;
    let bracket = session
        .playoffs()
        .ok_or_else(|| ApiError::Internal("bracket missing after advance".to_string()))?;

    Ok(Json(AdvanceResponse {
        advanced: result.is_some(),
        result,
        phase: bracket.phase(),
        placings: bracket.placings(),
    }))
}
