use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/category/open", post(handlers::open_category))
        .route("/category/close", post(handlers::close_category))
        .route("/activity", post(handlers::submit_activity))
        .route("/api/portfolio", get(handlers::get_portfolio))
        .route("/api/activities", post(handlers::record_activity))
        .with_state(state)
}
