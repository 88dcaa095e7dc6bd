use std::sync::Arc;

use chrono::NaiveDate;

use crate::session::TournamentSession;

/// The single tournament session, present once a roster has been uploaded.
pub type SharedSession = Arc<tokio::sync::RwLock<Option<TournamentSession>>>;

#[derive(Clone)]
pub struct AppState {
    pub session: SharedSession,
    /// League start date for the generated schedule.
    pub start_date: NaiveDate,
    /// Optional seed for reproducible tournaments.
    pub seed: Option<u64>,
}

impl AppState {
    pub fn new(start_date: NaiveDate, seed: Option<u64>) -> Self {
        Self {
            session: Arc::new(tokio::sync::RwLock::new(None)),
            start_date,
            seed,
        }
    }
}
