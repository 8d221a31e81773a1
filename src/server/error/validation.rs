use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{FieldErrorDto, ValidationErrorsDto};

/// A single rejected input field with a human-readable reason.
#[derive(Debug, Clone)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Collected field-level validation failures for one request.
///
/// Maps to a 400 response with per-field messages so clients can surface
/// errors next to the offending form inputs.
#[derive(Error, Debug)]
#[error("Validation failed for fields: {:?}", .errors.iter().map(|e| e.field).collect::<Vec<_>>())]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let errors = self
            .errors
            .into_iter()
            .map(|e| FieldErrorDto {
                field: e.field.to_string(),
                message: e.message,
            })
            .collect();

        (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorsDto {
                message: "Validation failed".to_string(),
                errors,
            }),
        )
            .into_response()
    }
}
