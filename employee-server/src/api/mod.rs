//! HTTP routes

pub mod employees;
pub mod health;

use axum::Router;
use http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(employees::router())
        .merge(health::router())
}

/// Build the application: routes, request tracing and state.
///
/// CORS is layered on separately by the binary, see [`cors_layer`].
pub fn create_router(state: AppState) -> Router {
    build_router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS restricted to one origin, with credentials and a fixed allow-list
pub fn cors_layer(origin: &str) -> Result<CorsLayer, http::header::InvalidHeaderValue> {
    Ok(CorsLayer::new()
        .allow_origin(HeaderValue::from_str(origin)?)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}
