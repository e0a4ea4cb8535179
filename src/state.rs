use crate::models::WeeklyScores;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared handler state. The weekly store is injected here instead of
/// living in a process-wide global so tests can build isolated instances.
#[derive(Clone)]
pub struct AppState {
    pub weekly: Arc<Mutex<WeeklyScores>>,
}

impl AppState {
    pub fn new(weekly: WeeklyScores) -> Self {
        Self {
            weekly: Arc::new(Mutex::new(weekly)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(WeeklyScores::default())
    }
}
