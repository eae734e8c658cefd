use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
/// Returns 200 OK if the process is alive
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
/// Reports 503 while the intake endpoint is unconfigured, so a placeholder
/// deployment is visible to operators. Visitors are unaffected either way.
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    if state.config.intake_configured() {
        (StatusCode::OK, Json(json!({"status": "ready"})))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "reason": "intake_endpoint_unconfigured"
            })),
        )
    }
}
