use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

pub struct ReviewRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    /// Creates a new instance of [`ReviewRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a review. The caller must have verified the book exists and
    /// that no review by this user for this book already does.
    pub async fn create(
        &self,
        book_id: i32,
        user_id: i32,
        rating: i32,
        review_text: &str,
    ) -> Result<entity::review::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let review = entity::review::ActiveModel {
            book_id: ActiveValue::Set(book_id),
            user_id: ActiveValue::Set(user_id),
            rating: ActiveValue::Set(rating),
            review_text: ActiveValue::Set(review_text.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        review.insert(self.db).await
    }

    /// Get a review by its primary key
    pub async fn get_by_id(&self, review_id: i32) -> Result<Option<entity::review::Model>, DbErr> {
        entity::prelude::Review::find_by_id(review_id)
            .one(self.db)
            .await
    }

    /// Get a review together with its author's record
    pub async fn get_with_author(
        &self,
        review_id: i32,
    ) -> Result<Option<(entity::review::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Review::find_by_id(review_id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await
    }

    /// The uniqueness probe: at most one review exists per (book, user) pair.
    pub async fn find_by_book_and_user(
        &self,
        book_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::review::Model>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::BookId.eq(book_id))
            .filter(entity::review::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// All reviews for a book, newest first, each with its author's record
    pub async fn list_by_book(
        &self,
        book_id: i32,
    ) -> Result<Vec<(entity::review::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::BookId.eq(book_id))
            .order_by_desc(entity::review::Column::CreatedAt)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await
    }

    /// All reviews written by a user, newest first, each with the reviewed
    /// book's record
    pub async fn list_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::review::Model, Option<entity::book::Model>)>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::UserId.eq(user_id))
            .order_by_desc(entity::review::Column::CreatedAt)
            .find_also_related(entity::prelude::Book)
            .all(self.db)
            .await
    }

    /// Updates a review's rating and text
    pub async fn update(
        &self,
        review: entity::review::Model,
        rating: i32,
        review_text: &str,
    ) -> Result<entity::review::Model, DbErr> {
        let mut review: entity::review::ActiveModel = review.into();

        review.rating = ActiveValue::Set(rating);
        review.review_text = ActiveValue::Set(review_text.to_string());
        review.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        review.update(self.db).await
    }

    /// Deletes a review
    ///
    /// Returns OK regardless of the review existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, review_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Review::delete_by_id(review_id)
            .exec(self.db)
            .await
    }

    /// Deletes every review referencing a book; used when the book itself
    /// is deleted so no orphaned reviews remain.
    pub async fn delete_by_book(&self, book_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Review::delete_many()
            .filter(entity::review::Column::BookId.eq(book_id))
            .exec(self.db)
            .await
    }

    /// The rating values of every review for a book, for aggregation.
    pub async fn ratings_for_book(&self, book_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Review::find()
            .select_only()
            .column(entity::review::Column::Rating)
            .filter(entity::review::Column::BookId.eq(book_id))
            .into_tuple()
            .all(self.db)
            .await
    }
}
