//! Employee API Module

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

/// Employee router
pub fn router() -> Router<AppState> {
    Router::new().nest("/api/employees", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", put(handler::update).delete(handler::delete))
}
