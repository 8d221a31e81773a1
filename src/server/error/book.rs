use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Book {0:?} not found")]
    NotFound(i32),
    #[error("User {user_id:?} is not the owner of book {book_id:?}")]
    NotOwner { book_id: i32, user_id: i32 },
}

impl IntoResponse for BookError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    message: "Book not found".to_string(),
                }),
            )
                .into_response(),
            Self::NotOwner { book_id, user_id } => {
                tracing::debug!(book_id = %book_id, user_id = %user_id, "{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        message: "Not authorized to modify this book".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
