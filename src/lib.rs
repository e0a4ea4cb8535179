pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod scoring;
pub mod state;
pub mod ui;

pub use app::router;
pub use state::AppState;
