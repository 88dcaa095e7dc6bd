use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::round2;

#[derive(Debug, Serialize)]
pub struct StandingsEntry {
    pub position: usize,
    pub team: String,
    pub matches: u32,
    pub wins: u32,
    pub losses: u32,
    pub points: u32,
    pub nrr: f64,
    pub qualified: bool,
    /// Directional form indicator: "↑" after a win, "↓" after a loss,
    /// absent before the team's first match.
    pub form: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct StandingsResponse {
    pub rows: Vec<StandingsEntry>,
    pub league_complete: bool,
}

/// The ranked points table. Qualification flags are recomputed on every
/// render once the league phase is complete.
pub async fn standings(State(state): State<AppState>) -> Result<Json<StandingsResponse>, ApiError> {
    // Write lock: rendering after completion re-marks the qualified flags.
    let mut guard = state.session.write().await;
    let session = guard
        .as_mut()
        .ok_or_else(|| ApiError::NotFound("no tournament session; upload a roster".to_string()))?;

    let rows = session
        .standings()
        .into_iter()
        .enumerate()
        .map(|(index, row)| StandingsEntry {
            position: index + 1,
            team: row.team.clone(),
            matches: row.matches,
            wins: row.wins,
            losses: row.losses,
            points: row.points,
            nrr: round2(row.nrr),
            qualified: row.qualified,
            form: row.latest_form().map(|marker| marker.arrow()),
        })
        .collect();

    Ok(Json(StandingsResponse {
        rows,
        league_complete: session.league_complete(),
    }))
}
