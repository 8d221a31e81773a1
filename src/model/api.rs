use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub message: String,
}

/// The response for a mutation that carries no entity payload
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// A single field-level validation failure
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

/// The 400 response body for rejected input
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ValidationErrorsDto {
    pub message: String,
    pub errors: Vec<FieldErrorDto>,
}

/// The response for the health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthDto {
    pub status: String,
}
