use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/session", get(handlers::get_session))
        .route("/api/session/reset", post(handlers::reset_session))
        .route("/api/profile", put(handlers::put_profile))
        .route("/api/entries/:day", put(handlers::put_entry))
        .route(
            "/api/summary",
            get(handlers::get_summary).post(handlers::request_summary),
        )
        .with_state(state)
}
