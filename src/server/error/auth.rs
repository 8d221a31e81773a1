use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authorization header is missing or malformed")]
    MissingToken,
    #[error("Bearer token is invalid or expired")]
    InvalidToken,
    #[error("User ID {0:?} from a valid token was not found in the database")]
    UserNotInDatabase(i32),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("An account already exists for email {0:?}")]
    EmailTaken(String),
    #[error("Failed to encode authentication token")]
    TokenCreation(#[from] jsonwebtoken::errors::Error),
}

impl AuthError {
    fn reject(status: StatusCode, message: &str) -> Response {
        (
            status,
            Json(ErrorDto {
                message: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            // Missing/malformed credential is 401; a credential that fails
            // verification (or points at a deleted user) is 403.
            Self::MissingToken => Self::reject(StatusCode::UNAUTHORIZED, "Authentication required"),
            Self::InvalidToken => {
                Self::reject(StatusCode::FORBIDDEN, "Invalid or expired token")
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                Self::reject(StatusCode::FORBIDDEN, "Invalid or expired token")
            }
            Self::InvalidCredentials => {
                Self::reject(StatusCode::BAD_REQUEST, "Invalid email or password")
            }
            Self::EmailTaken(_) => Self::reject(
                StatusCode::BAD_REQUEST,
                "An account with this email already exists",
            ),
            Self::TokenCreation(_) => InternalServerError(self).into_response(),
        }
    }
}
