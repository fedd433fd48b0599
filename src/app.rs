use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/session", post(handlers::start_session))
        .route("/api/history", get(handlers::get_history))
        .route("/api/toggle", post(handlers::toggle))
        .with_state(state)
}
