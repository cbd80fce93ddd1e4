//! Error types
//!
//! Two layers, two enums:
//!
//! - `StoreError`: anything the repository can fail with
//! - `ApiError`: what a handler returns; rendered as a plain-text body
//!
//! Every `StoreError` surfaces as a 500 carrying its message verbatim,
//! including "not found".

use axum::response::{IntoResponse, Response};
use http::StatusCode;

/// Repository-layer error
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found: employee {0}")]
    NotFound(i64),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Handler error
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed body or path parameter (400)
    #[error("{0}")]
    BadRequest(String),

    /// Persistence failure (500)
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn invalid_id() -> Self {
        Self::BadRequest("Invalid ID format".into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        tracing::error!(error = %e, "Employee store error");
        ApiError::Internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest(m) | Self::Internal(m) => m,
        };
        (status, message).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
