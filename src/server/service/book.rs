use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::book::{BookDto, BookInputDto, BookListDto, BookQueryParams, PaginationDto},
    server::{
        data::{
            book::{BookFilter, BookRepository},
            review::ReviewRepository,
        },
        error::{book::BookError, Error},
        model::db::{BookModel, UserModel},
    },
};

/// Fixed page size for all book list endpoints.
pub const PAGE_SIZE: u64 = 10;

pub struct BookService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookService<'a> {
    /// Creates a new instance of [`BookService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The public book listing: filtered, sorted, paginated, each book with
    /// its owner's public identity attached.
    pub async fn list(&self, params: BookQueryParams) -> Result<BookListDto, Error> {
        let page = params.page.unwrap_or(1).max(1);

        let filter = BookFilter {
            search: non_empty(params.search),
            genre: non_empty(params.genre),
            sort: params.sort_by,
        };

        let (rows, total) = BookRepository::new(self.db)
            .list(&filter, page, PAGE_SIZE)
            .await?;

        Ok(page_dto(rows, page, total))
    }

    /// The books added by the acting user, newest first.
    pub async fn list_by_user(&self, user_id: i32, page: Option<u64>) -> Result<BookListDto, Error> {
        let page = page.unwrap_or(1).max(1);

        let (rows, total) = BookRepository::new(self.db)
            .list_by_user(user_id, page, PAGE_SIZE)
            .await?;

        Ok(page_dto(rows, page, total))
    }

    pub async fn get(&self, book_id: i32) -> Result<BookDto, Error> {
        let (book, owner) = BookRepository::new(self.db)
            .get_with_owner(book_id)
            .await?
            .ok_or(BookError::NotFound(book_id))?;

        Ok(BookDto::from_model(book, owner))
    }

    pub async fn create(&self, user: &UserModel, input: BookInputDto) -> Result<BookDto, Error> {
        let book = BookRepository::new(self.db).create(&input, user.id).await?;

        Ok(BookDto::from_model(book, Some(user.clone())))
    }

    /// Updates a book's content fields. Only the owner may update.
    pub async fn update(
        &self,
        user: &UserModel,
        book_id: i32,
        input: BookInputDto,
    ) -> Result<BookDto, Error> {
        let book_repository = BookRepository::new(self.db);

        let book = book_repository
            .get_by_id(book_id)
            .await?
            .ok_or(BookError::NotFound(book_id))?;

        if book.added_by != user.id {
            return Err(BookError::NotOwner {
                book_id,
                user_id: user.id,
            }
            .into());
        }

        let updated = book_repository.update(book, &input).await?;

        Ok(BookDto::from_model(updated, Some(user.clone())))
    }

    /// Deletes a book and all of its reviews. Only the owner may delete.
    ///
    /// The review cascade runs in the same transaction as the book delete so
    /// a failure leaves both intact rather than orphaning reviews.
    pub async fn delete(&self, user: &UserModel, book_id: i32) -> Result<(), Error> {
        let book = BookRepository::new(self.db)
            .get_by_id(book_id)
            .await?
            .ok_or(BookError::NotFound(book_id))?;

        if book.added_by != user.id {
            return Err(BookError::NotOwner {
                book_id,
                user_id: user.id,
            }
            .into());
        }

        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    ReviewRepository::new(txn).delete_by_book(book_id).await?;
                    BookRepository::new(txn).delete(book_id).await?;

                    Ok(())
                })
            })
            .await?;

        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn page_dto(
    rows: Vec<(BookModel, Option<UserModel>)>,
    page: u64,
    total: u64,
) -> BookListDto {
    let books = rows
        .into_iter()
        .map(|(book, owner)| BookDto::from_model(book, owner))
        .collect();

    BookListDto {
        books,
        pagination: pagination(page, total),
    }
}

/// Pagination metadata. With zero matches `total_pages` is 0 and a page
/// beyond the last one simply has `has_next = false`.
fn pagination(current_page: u64, total_books: u64) -> PaginationDto {
    let total_pages = total_books.div_ceil(PAGE_SIZE);

    PaginationDto {
        current_page,
        total_pages,
        total_books,
        has_next: current_page < total_pages,
        has_prev: current_page > 1,
    }
}
