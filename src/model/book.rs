use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::user::UserDto;

/// Request body for creating or updating a book. The same field set applies
/// to both operations; `addedBy` and the derived rating fields are never
/// client-settable.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BookInputDto {
    pub title: String,
    pub author: String,
    pub description: String,
    pub genre: String,
    pub year: i32,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub description: String,
    pub genre: String,
    pub year: i32,
    pub average_rating: f64,
    pub total_reviews: i32,
    /// Public identity of the user that listed the book
    pub added_by: Option<UserDto>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl BookDto {
    pub fn from_model(book: entity::book::Model, owner: Option<entity::user::Model>) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            description: book.description,
            genre: book.genre,
            year: book.year,
            average_rating: book.average_rating,
            total_reviews: book.total_reviews,
            added_by: owner.map(UserDto::from),
            created_at: book.created_at,
            updated_at: book.updated_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_books: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct BookListDto {
    pub books: Vec<BookDto>,
    pub pagination: PaginationDto,
}

/// The response for a successful book mutation
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct BookPayloadDto {
    pub message: String,
    pub book: BookDto,
}

/// Sort orders accepted by the book list endpoint. The unset default is
/// newest first.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookSort {
    Title,
    Author,
    Year,
    Rating,
}

#[derive(Clone, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct BookQueryParams {
    /// 1-based page number, defaults to 1
    pub page: Option<u64>,
    /// Case-insensitive substring match across title, author, and description
    pub search: Option<String>,
    /// Case-insensitive substring match on genre
    pub genre: Option<String>,
    pub sort_by: Option<BookSort>,
}

#[derive(Clone, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// 1-based page number, defaults to 1
    pub page: Option<u64>,
}
