pub mod events;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::state::RecordId;

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors a handler can answer with
pub enum AppError {
    NotFound(RecordId),
    BadRequest(String),
    Exhausted,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::NotFound(id) => (StatusCode::NOT_FOUND, format!("Record {id} not found")),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Exhausted => (StatusCode::INSUFFICIENT_STORAGE, "No record ids left".to_string()),
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}
