use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/mood", post(handlers::submit_mood_form))
        .route("/api/tab", post(handlers::switch_tab))
        .route("/api/mood", post(handlers::submit_mood))
        .route("/api/insights", get(handlers::get_insights))
        .route("/api/chat", get(handlers::get_transcript).post(handlers::send_chat))
        .route("/api/resources", get(handlers::get_resources))
        .with_state(state)
}
