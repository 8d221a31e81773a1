use sea_orm::{DatabaseConnection, SqlErr, TransactionError, TransactionTrait};

use crate::{
    model::{
        review::{CreateReviewDto, ReviewDto, UpdateReviewDto},
        user::UserDto,
    },
    server::{
        data::{book::BookRepository, review::ReviewRepository},
        error::{book::BookError, review::ReviewError, Error},
        model::db::{ReviewModel, UserModel},
        service::rating::RatingService,
    },
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    /// Creates a new instance of [`ReviewService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a review for a book the acting user has not yet reviewed.
    ///
    /// The insert and the rating recomputation run in one transaction, so
    /// the book's derived fields are updated before the response is sent
    /// and never persist out of sync with the review set.
    pub async fn create(
        &self,
        user: &UserModel,
        input: CreateReviewDto,
    ) -> Result<ReviewDto, Error> {
        let book_id = input.book_id;
        let user_id = user.id;

        BookRepository::new(self.db)
            .get_by_id(book_id)
            .await?
            .ok_or(BookError::NotFound(book_id))?;

        if ReviewRepository::new(self.db)
            .find_by_book_and_user(book_id, user_id)
            .await?
            .is_some()
        {
            return Err(ReviewError::Duplicate { book_id, user_id }.into());
        }

        let review = self
            .db
            .transaction::<_, ReviewModel, sea_orm::DbErr>(move |txn| {
                Box::pin(async move {
                    let review = ReviewRepository::new(txn)
                        .create(book_id, user_id, input.rating, &input.review_text)
                        .await?;

                    RatingService::new(txn).recompute(book_id).await?;

                    Ok(review)
                })
            })
            .await
            .map_err(|err| duplicate_on_unique_violation(err, book_id, user_id))?;

        Ok(ReviewDto::from_model(review, Some(user.clone())))
    }

    /// Updates a review's rating and text. Only the author may update.
    pub async fn update(
        &self,
        user: &UserModel,
        review_id: i32,
        input: UpdateReviewDto,
    ) -> Result<ReviewDto, Error> {
        let review = ReviewRepository::new(self.db)
            .get_by_id(review_id)
            .await?
            .ok_or(ReviewError::NotFound(review_id))?;

        if review.user_id != user.id {
            return Err(ReviewError::NotAuthor {
                review_id,
                user_id: user.id,
            }
            .into());
        }

        let book_id = review.book_id;

        let updated = self
            .db
            .transaction::<_, ReviewModel, sea_orm::DbErr>(move |txn| {
                Box::pin(async move {
                    let updated = ReviewRepository::new(txn)
                        .update(review, input.rating, &input.review_text)
                        .await?;

                    RatingService::new(txn).recompute(book_id).await?;

                    Ok(updated)
                })
            })
            .await?;

        Ok(ReviewDto::from_model(updated, Some(user.clone())))
    }

    /// Deletes a review and recomputes the book's rating. Only the author
    /// may delete.
    pub async fn delete(&self, user: &UserModel, review_id: i32) -> Result<(), Error> {
        let review = ReviewRepository::new(self.db)
            .get_by_id(review_id)
            .await?
            .ok_or(ReviewError::NotFound(review_id))?;

        if review.user_id != user.id {
            return Err(ReviewError::NotAuthor {
                review_id,
                user_id: user.id,
            }
            .into());
        }

        let book_id = review.book_id;

        self.db
            .transaction::<_, (), sea_orm::DbErr>(move |txn| {
                Box::pin(async move {
                    ReviewRepository::new(txn).delete(review.id).await?;
                    RatingService::new(txn).recompute(book_id).await?;

                    Ok(())
                })
            })
            .await?;

        Ok(())
    }

    /// A single review with its author's identity and the reviewed book's
    /// title and author attached.
    pub async fn get(&self, review_id: i32) -> Result<ReviewDto, Error> {
        let (review, author) = ReviewRepository::new(self.db)
            .get_with_author(review_id)
            .await?
            .ok_or(ReviewError::NotFound(review_id))?;

        let book = BookRepository::new(self.db)
            .get_by_id(review.book_id)
            .await?;

        let mut dto = ReviewDto::from_model(review, author);
        if let Some(book) = book {
            dto = dto.with_book(book);
        }

        Ok(dto)
    }

    /// All reviews for a book, newest first, authors attached.
    pub async fn list_by_book(&self, book_id: i32) -> Result<Vec<ReviewDto>, Error> {
        let rows = ReviewRepository::new(self.db).list_by_book(book_id).await?;

        Ok(rows
            .into_iter()
            .map(|(review, author)| ReviewDto::from_model(review, author))
            .collect())
    }

    /// The acting user's reviews, newest first, with the reviewed books'
    /// titles attached.
    pub async fn list_by_user(&self, user: &UserModel) -> Result<Vec<ReviewDto>, Error> {
        let rows = ReviewRepository::new(self.db).list_by_user(user.id).await?;

        let author = UserDto::from(user.clone());

        Ok(rows
            .into_iter()
            .map(|(review, book)| {
                let mut dto = ReviewDto::from_model(review, None);
                dto.user = Some(author.clone());
                if let Some(book) = book {
                    dto = dto.with_book(book);
                }
                dto
            })
            .collect())
    }
}

/// The pre-insert duplicate probe can race a concurrent insert; the unique
/// index on (book_id, user_id) then rejects ours, which must still surface
/// as the duplicate-review conflict rather than a server error.
fn duplicate_on_unique_violation(
    err: TransactionError<sea_orm::DbErr>,
    book_id: i32,
    user_id: i32,
) -> Error {
    let db_err = match err {
        TransactionError::Connection(e) | TransactionError::Transaction(e) => e,
    };

    if matches!(db_err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        ReviewError::Duplicate { book_id, user_id }.into()
    } else {
        db_err.into()
    }
}
