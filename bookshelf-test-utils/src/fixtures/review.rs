use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};

use crate::error::TestError;

/// Inserts a review row directly, without touching the book's derived
/// rating fields.
pub async fn insert_review<C: ConnectionTrait>(
    db: &C,
    book_id: i32,
    user_id: i32,
    rating: i32,
) -> Result<entity::review::Model, TestError> {
    let now = Utc::now().naive_utc();

    let review = entity::review::ActiveModel {
        book_id: Set(book_id),
        user_id: Set(user_id),
        rating: Set(rating),
        review_text: Set("A placeholder review body for tests.".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(review)
}
