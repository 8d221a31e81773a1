use sea_orm::{ConnectionTrait, DbErr};

use crate::server::data::{book::BookRepository, review::ReviewRepository};

/// Keeps `Book.average_rating` and `Book.total_reviews` equal to a
/// deterministic function of the book's current review set.
///
/// Every review mutation calls [`RatingService::recompute`] inside the same
/// transaction as the mutation itself, so the derived fields can never
/// persist out of sync with the reviews.
pub struct RatingService<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RatingService<'a, C> {
    /// Creates a new instance of [`RatingService`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Recompute a book's derived rating fields from its review set.
    ///
    /// Idempotent: the result depends only on the reviews present at the
    /// time of the read. An empty review set resets both fields to zero.
    pub async fn recompute(&self, book_id: i32) -> Result<(), DbErr> {
        let ratings = ReviewRepository::new(self.db)
            .ratings_for_book(book_id)
            .await?;

        let average = average_rating(&ratings);
        let total = ratings.len() as i32;

        BookRepository::new(self.db)
            .set_rating(book_id, average, total)
            .await
    }
}

/// Mean rating rounded half-up to one decimal; 0.0 for an empty set.
fn average_rating(ratings: &[i32]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }

    let mean = ratings.iter().copied().map(f64::from).sum::<f64>() / ratings.len() as f64;

    (mean * 10.0).round() / 10.0
}
