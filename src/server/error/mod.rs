//! Error types for the Bookshelf server application.
//!
//! Domain-specific error enums (authentication, books, reviews, validation,
//! configuration) are aggregated into a single [`Error`] type. All errors
//! implement `IntoResponse` for Axum; unexpected failures are routed through
//! [`InternalServerError`], which logs the cause and returns a generic 500
//! body so internals never leak to the client.

pub mod auth;
pub mod book;
pub mod config;
pub mod review;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::TransactionError;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, book::BookError, config::ConfigError, review::ReviewError,
        validation::ValidationError,
    },
};

/// Main error type for the Bookshelf server application.
///
/// Aggregates the domain-specific error types and external library errors
/// into a single unified error so handlers can use `?` throughout.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    #[error(transparent)]
    AuthError(#[from] AuthError),
    #[error(transparent)]
    BookError(#[from] BookError),
    #[error(transparent)]
    ReviewError(#[from] ReviewError),
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Password hashing or verification failure.
    #[error(transparent)]
    HashError(#[from] bcrypt::BcryptError),
}

impl From<TransactionError<sea_orm::DbErr>> for Error {
    fn from(err: TransactionError<sea_orm::DbErr>) -> Self {
        match err {
            TransactionError::Connection(e) => Error::DbErr(e),
            TransactionError::Transaction(e) => Error::DbErr(e),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::BookError(err) => err.into_response(),
            Self::ReviewError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the full error message for debugging but returns a generic message
/// to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                message: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
