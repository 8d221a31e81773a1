use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::user::UserDto;

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewDto {
    pub book_id: i32,
    pub rating: i32,
    pub review_text: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewDto {
    pub rating: i32,
    pub review_text: String,
}

/// Title and author of the reviewed book, embedded in single-review and
/// my-reviews responses.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReviewBookDto {
    pub id: i32,
    pub title: String,
    pub author: String,
}

impl From<entity::book::Model> for ReviewBookDto {
    fn from(book: entity::book::Model) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: i32,
    pub book_id: i32,
    pub rating: i32,
    pub review_text: String,
    /// Public identity of the review's author
    pub user: Option<UserDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book: Option<ReviewBookDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ReviewDto {
    pub fn from_model(
        review: entity::review::Model,
        author: Option<entity::user::Model>,
    ) -> Self {
        Self {
            id: review.id,
            book_id: review.book_id,
            rating: review.rating,
            review_text: review.review_text,
            user: author.map(UserDto::from),
            book: None,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }

    pub fn with_book(mut self, book: entity::book::Model) -> Self {
        self.book = Some(ReviewBookDto::from(book));
        self
    }
}

/// The response for a successful review mutation
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReviewPayloadDto {
    pub message: String,
    pub review: ReviewDto,
}
