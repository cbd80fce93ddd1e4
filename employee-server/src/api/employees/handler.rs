//! Employee API Handlers
//!
//! Bodies are decoded by hand from raw bytes so that any malformed payload
//! (bad syntax, wrong field type, missing Content-Type) is a 400 carrying
//! the decoder's message. Path ids that fail to extract or parse are all
//! reported as "Invalid ID format".

use std::collections::HashMap;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State, rejection::PathRejection},
    http::StatusCode,
};
use shared::models::{Employee, EmployeeInput};
use shared::request::PageRequest;
use shared::response::PaginatedResponse;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

fn decode_input(body: &[u8]) -> ApiResult<EmployeeInput> {
    EmployeeInput::from_json(body).map_err(|e| ApiError::BadRequest(e.to_string()))
}

fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse().map_err(|_| ApiError::invalid_id())
}

fn path_id(path: Result<Path<String>, PathRejection>) -> ApiResult<i64> {
    let Path(raw) = path.map_err(|_| ApiError::invalid_id())?;
    parse_id(&raw)
}

/// POST /api/employees
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let input = decode_input(&body)?;
    let employee = state.employees.create(input).await?;
    tracing::debug!(id = employee.id, "Employee created");
    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /api/employees?page=&limit=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<PaginatedResponse<Employee>>> {
    let request = PageRequest::from_query(
        params.get("page").map(String::as_str),
        params.get("limit").map(String::as_str),
    );

    let data = state
        .employees
        .find_page(request.offset(), request.limit)
        .await?;
    let total = state.employees.count().await?;

    Ok(Json(PaginatedResponse::new(data, total, request)))
}

/// PUT /api/employees/{id}
///
/// Full overwrite: fields absent from the body are stored as empty strings.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> ApiResult<Json<Employee>> {
    let id = path_id(path)?;
    let input = decode_input(&body)?;
    let employee = state.employees.update(id, input).await?;
    Ok(Json(employee))
}

/// DELETE /api/employees/{id}
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<StatusCode> {
    let id = path_id(path)?;
    state.employees.delete(id).await?;
    tracing::debug!(id, "Employee deleted");
    Ok(StatusCode::NO_CONTENT)
}
