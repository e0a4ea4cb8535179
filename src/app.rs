use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::analyze))
        .route("/api/weekly", get(handlers::get_weekly))
        .route("/api/analyze", post(handlers::analyze_json))
        .with_state(state)
}
