//! Health check endpoint

use axum::{Json, Router, extract::State, routing::get};

use crate::state::AppState;

/// Health router
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let db_ok = match state.employees.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check: database unreachable");
            false
        }
    };
    let status = if db_ok { "ok" } else { "degraded" };
    Json(serde_json::json!({
        "status": status,
        "service": "employee-server",
        "version": env!("CARGO_PKG_VERSION"),
        "db": db_ok,
    }))
}
