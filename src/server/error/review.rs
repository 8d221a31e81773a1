use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("Review {0:?} not found")]
    NotFound(i32),
    #[error("User {user_id:?} is not the author of review {review_id:?}")]
    NotAuthor { review_id: i32, user_id: i32 },
    #[error("User {user_id:?} has already reviewed book {book_id:?}")]
    Duplicate { book_id: i32, user_id: i32 },
}

impl IntoResponse for ReviewError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    message: "Review not found".to_string(),
                }),
            )
                .into_response(),
            Self::NotAuthor { review_id, user_id } => {
                tracing::debug!(review_id = %review_id, user_id = %user_id, "{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        message: "Not authorized to modify this review".to_string(),
                    }),
                )
                    .into_response()
            }
            // Duplicate review is a client error on the create request, not a
            // conflict with another user's data, so it maps to 400.
            Self::Duplicate { .. } => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    message: "You have already reviewed this book".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
