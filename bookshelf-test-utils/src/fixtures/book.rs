use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};

use crate::error::TestError;

/// Inserts a book with placeholder content fields and zeroed rating fields.
pub async fn insert_book<C: ConnectionTrait>(
    db: &C,
    added_by: i32,
    title: &str,
) -> Result<entity::book::Model, TestError> {
    insert_book_in_genre(db, added_by, title, "Fiction").await
}

/// Inserts a book under a specific genre, for filter and search tests.
pub async fn insert_book_in_genre<C: ConnectionTrait>(
    db: &C,
    added_by: i32,
    title: &str,
    genre: &str,
) -> Result<entity::book::Model, TestError> {
    let now = Utc::now().naive_utc();

    let book = entity::book::ActiveModel {
        title: Set(title.to_string()),
        author: Set("Test Author".to_string()),
        description: Set("A placeholder description for tests.".to_string()),
        genre: Set(genre.to_string()),
        year: Set(2000),
        added_by: Set(added_by),
        average_rating: Set(0.0),
        total_reviews: Set(0),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(book)
}
