use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, ExprTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::model::book::{BookInputDto, BookSort};

/// Filters and ordering for the book list endpoint.
#[derive(Default)]
pub struct BookFilter {
    /// Case-insensitive substring match across title, author, and description
    pub search: Option<String>,
    /// Case-insensitive substring match on genre; combined with `search` as AND
    pub genre: Option<String>,
    /// `None` sorts newest first
    pub sort: Option<BookSort>,
}

pub struct BookRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookRepository<'a, C> {
    /// Creates a new instance of [`BookRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new book owned by `added_by`, with derived rating fields
    /// zeroed. Input is expected to be validated already.
    pub async fn create(
        &self,
        input: &BookInputDto,
        added_by: i32,
    ) -> Result<entity::book::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let book = entity::book::ActiveModel {
            title: ActiveValue::Set(input.title.clone()),
            author: ActiveValue::Set(input.author.clone()),
            description: ActiveValue::Set(input.description.clone()),
            genre: ActiveValue::Set(input.genre.clone()),
            year: ActiveValue::Set(input.year),
            added_by: ActiveValue::Set(added_by),
            average_rating: ActiveValue::Set(0.0),
            total_reviews: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        book.insert(self.db).await
    }

    /// Get a book by its primary key
    pub async fn get_by_id(&self, book_id: i32) -> Result<Option<entity::book::Model>, DbErr> {
        entity::prelude::Book::find_by_id(book_id).one(self.db).await
    }

    /// Get a book together with its owning user's record
    pub async fn get_with_owner(
        &self,
        book_id: i32,
    ) -> Result<Option<(entity::book::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Book::find_by_id(book_id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await
    }

    /// Updates a book's content fields. `added_by` and the derived rating
    /// fields are never touched here.
    pub async fn update(
        &self,
        book: entity::book::Model,
        input: &BookInputDto,
    ) -> Result<entity::book::Model, DbErr> {
        let mut book: entity::book::ActiveModel = book.into();

        book.title = ActiveValue::Set(input.title.clone());
        book.author = ActiveValue::Set(input.author.clone());
        book.description = ActiveValue::Set(input.description.clone());
        book.genre = ActiveValue::Set(input.genre.clone());
        book.year = ActiveValue::Set(input.year);
        book.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        book.update(self.db).await
    }

    /// Deletes a book
    ///
    /// Returns OK regardless of the book existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, book_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Book::delete_by_id(book_id)
            .exec(self.db)
            .await
    }

    /// Writes a book's derived rating fields in a single statement.
    ///
    /// Only the rating service may call this; no other code path writes
    /// `average_rating` or `total_reviews`.
    pub async fn set_rating(
        &self,
        book_id: i32,
        average_rating: f64,
        total_reviews: i32,
    ) -> Result<(), DbErr> {
        entity::prelude::Book::update_many()
            .col_expr(
                entity::book::Column::AverageRating,
                Expr::value(average_rating),
            )
            .col_expr(entity::book::Column::TotalReviews, Expr::value(total_reviews))
            .filter(entity::book::Column::Id.eq(book_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// List books matching `filter`, one page at a time, each with its
    /// owner's record. Returns the page rows and the total match count.
    /// A page beyond the last yields an empty page, not an error.
    pub async fn list(
        &self,
        filter: &BookFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<(entity::book::Model, Option<entity::user::Model>)>, u64), DbErr> {
        let select = apply_filter(entity::prelude::Book::find(), filter);

        let total = select.clone().count(self.db).await?;
        let rows = select
            .find_also_related(entity::prelude::User)
            .paginate(self.db, per_page)
            .fetch_page(page.saturating_sub(1))
            .await?;

        Ok((rows, total))
    }

    /// List the books added by one user, newest first, paginated.
    pub async fn list_by_user(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<(entity::book::Model, Option<entity::user::Model>)>, u64), DbErr> {
        let select = entity::prelude::Book::find()
            .filter(entity::book::Column::AddedBy.eq(user_id))
            .order_by_desc(entity::book::Column::CreatedAt);

        let total = select.clone().count(self.db).await?;
        let rows = select
            .find_also_related(entity::prelude::User)
            .paginate(self.db, per_page)
            .fetch_page(page.saturating_sub(1))
            .await?;

        Ok((rows, total))
    }
}

fn apply_filter(
    mut select: Select<entity::prelude::Book>,
    filter: &BookFilter,
) -> Select<entity::prelude::Book> {
    if let Some(search) = &filter.search {
        let pattern = like_pattern(search);

        select = select.filter(
            Condition::any()
                .add(
                    Expr::expr(Func::lower(Expr::col(entity::book::Column::Title)))
                        .like(pattern.clone()),
                )
                .add(
                    Expr::expr(Func::lower(Expr::col(entity::book::Column::Author)))
                        .like(pattern.clone()),
                )
                .add(
                    Expr::expr(Func::lower(Expr::col(entity::book::Column::Description)))
                        .like(pattern),
                ),
        );
    }

    if let Some(genre) = &filter.genre {
        select = select.filter(
            Expr::expr(Func::lower(Expr::col(entity::book::Column::Genre)))
                .like(like_pattern(genre)),
        );
    }

    match filter.sort {
        None => select.order_by_desc(entity::book::Column::CreatedAt),
        Some(BookSort::Title) => select.order_by_asc(entity::book::Column::Title),
        Some(BookSort::Author) => select.order_by_asc(entity::book::Column::Author),
        Some(BookSort::Year) => select.order_by_desc(entity::book::Column::Year),
        Some(BookSort::Rating) => select.order_by_desc(entity::book::Column::AverageRating),
    }
}

/// Builds a contains-match pattern, escaping `%`, `_`, and `\` so LIKE
/// wildcards in the user's term match literally.
fn like_pattern(term: &str) -> LikeExpr {
    let escaped = term
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    LikeExpr::new(format!("%{escaped}%")).escape('\\')
}
