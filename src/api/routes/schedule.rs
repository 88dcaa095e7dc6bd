use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;

#[derive(Debug, Serialize)]
pub struct ScheduleEntry {
    pub match_no: u32,
    pub date: String,
    pub home: String,
    pub away: String,
    pub time: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub matches: Vec<ScheduleEntry>,
}

/// The full fixture calendar: one match per day, alternating slots.
pub async fn schedule(State(state): State<AppState>) -> Result<Json<ScheduleResponse>, ApiError> {
    let guard = state.session.read().await;
    let session = guard
        .as_ref()
        .ok_or_else(|| ApiError::NotFound("no tournament session; upload a roster".to_string()))?;

    let matches = session
        .schedule()
        .iter()
        .map(|entry| ScheduleEntry {
            match_no: entry.fixture.number,
            date: entry.date.to_string(),
            home: entry.fixture.home.clone(),
            away: entry.fixture.away.clone(),
            time: entry.slot.label(),
        })
        .collect();

    Ok(Json(ScheduleResponse { matches }))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, StatusCode};

    use crate::api::routes::testutil::{app_with_roster, send, test_state};

    #[tokio::test]
    async fn test_schedule_calendar_shape() {
        let app = app_with_roster().await;

        let (status, json) = send(app, Method::GET, "/api/schedule", Body::empty()).await;

        assert_eq!(status, StatusCode::OK);
        let matches = json["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 12);
        assert_eq!(matches[0]["match_no"], 1);
        assert_eq!(matches[0]["date"], "2024-03-22");
        assert_eq!(matches[0]["home"], "A");
        assert_eq!(matches[0]["away"], "B");
        assert_eq!(matches[0]["time"], "02:00 PM GMT / 07:30 PM LOCAL");
        assert_eq!(matches[1]["date"], "2024-03-23");
        assert_eq!(matches[1]["time"], "10:00 AM GMT / 03:30 PM LOCAL");
    }

    #[tokio::test]
    async fn test_schedule_requires_session() {
        let app = crate::api::build_router(test_state());

        let (status, json) = send(app, Method::GET, "/api/schedule", Body::empty()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }
}
