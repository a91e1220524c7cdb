use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use std::sync::Arc;
use tracing::error;

/// Process-level liveness; answers as long as the server loop runs
async fn liveness() -> impl IntoResponse {
    (StatusCode::OK, "Healthy")
}

/// Readiness gates on a database round-trip
async fn readiness(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match crate::db::check_connection(&state.db).await {
        Ok(()) => (StatusCode::OK, "Healthy"),
        Err(e) => {
            error!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Unhealthy")
        }
    }
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/suppliers/liveness", get(liveness))
        .route("/suppliers/readiness", get(readiness))
}
