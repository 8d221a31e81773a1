use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorsDto},
        book::{BookDto, BookInputDto, BookListDto, BookPayloadDto, BookQueryParams, PageParams},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::book::BookService,
        validate,
    },
};

pub static BOOK_TAG: &str = "book";

/// List books
///
/// Public listing with optional search, genre filter, sort order, and
/// pagination. Defaults to newest first.
///
/// # Responses
/// - 200 (OK): The matching page of books with pagination metadata
/// - 500 (Internal Server Error): A database error occurred
#[utoipa::path(
    get,
    path = "/api/books",
    tag = BOOK_TAG,
    params(BookQueryParams),
    responses(
        (status = 200, description = "A page of books", body = BookListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_books(
    State(state): State<AppState>,
    Query(params): Query<BookQueryParams>,
) -> Result<impl IntoResponse, Error> {
    let books = BookService::new(&state.db).list(params).await?;

    Ok((StatusCode::OK, Json(books)))
}

/// List the books added by the logged in user
///
/// # Responses
/// - 200 (OK): The user's books, newest first, with pagination metadata
/// - 401 (Unauthorized): No bearer token was provided
/// - 403 (Forbidden): The token was invalid or expired
/// - 500 (Internal Server Error): A database error occurred
#[utoipa::path(
    get,
    path = "/api/books/my-books",
    tag = BOOK_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "A page of the user's books", body = BookListDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_books(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let books = BookService::new(&state.db)
        .list_by_user(user.id, params.page)
        .await?;

    Ok((StatusCode::OK, Json(books)))
}

/// Get a single book
///
/// # Responses
/// - 200 (OK): The book, with the listing user's public identity attached
/// - 404 (Not Found): No book exists with this id
/// - 500 (Internal Server Error): A database error occurred
#[utoipa::path(
    get,
    path = "/api/books/{id}",
    tag = BOOK_TAG,
    params(("id" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "The requested book", body = BookDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let book = BookService::new(&state.db).get(book_id).await?;

    Ok((StatusCode::OK, Json(book)))
}

/// Add a book
///
/// The logged in user becomes the book's owner. Rating fields start at
/// zero and are never client-settable.
///
/// # Responses
/// - 201 (Created): The book was added
/// - 400 (Bad Request): Validation failed
/// - 401 (Unauthorized): No bearer token was provided
/// - 403 (Forbidden): The token was invalid or expired
/// - 500 (Internal Server Error): A database error occurred
#[utoipa::path(
    post,
    path = "/api/books",
    tag = BOOK_TAG,
    request_body = BookInputDto,
    responses(
        (status = 201, description = "Book added", body = BookPayloadDto),
        (status = 400, description = "Validation failed", body = ValidationErrorsDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_book(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(input): Json<BookInputDto>,
) -> Result<impl IntoResponse, Error> {
    let input = validate::book_input(input)?;

    let book = BookService::new(&state.db).create(&user, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookPayloadDto {
            message: "Book added successfully".to_string(),
            book,
        }),
    ))
}

/// Update a book
///
/// Only the user that added the book may update it. Rating fields are
/// untouched by updates.
///
/// # Responses
/// - 200 (OK): The book was updated
/// - 400 (Bad Request): Validation failed
/// - 401 (Unauthorized): No bearer token was provided
/// - 403 (Forbidden): The token was invalid, or the user does not own the book
/// - 404 (Not Found): No book exists with this id
/// - 500 (Internal Server Error): A database error occurred
#[utoipa::path(
    put,
    path = "/api/books/{id}",
    tag = BOOK_TAG,
    params(("id" = i32, Path, description = "Book id")),
    request_body = BookInputDto,
    responses(
        (status = 200, description = "Book updated", body = BookPayloadDto),
        (status = 400, description = "Validation failed", body = ValidationErrorsDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not authorized to modify this book", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_book(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(book_id): Path<i32>,
    Json(input): Json<BookInputDto>,
) -> Result<impl IntoResponse, Error> {
    let input = validate::book_input(input)?;

    let book = BookService::new(&state.db)
        .update(&user, book_id, input)
        .await?;

    Ok((
        StatusCode::OK,
        Json(BookPayloadDto {
            message: "Book updated successfully".to_string(),
            book,
        }),
    ))
}

/// Delete a book
///
/// Only the user that added the book may delete it. All reviews of the
/// book are deleted with it.
///
/// # Responses
/// - 200 (OK): The book and its reviews were deleted
/// - 401 (Unauthorized): No bearer token was provided
/// - 403 (Forbidden): The token was invalid, or the user does not own the book
/// - 404 (Not Found): No book exists with this id
/// - 500 (Internal Server Error): A database error occurred
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    tag = BOOK_TAG,
    params(("id" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book deleted", body = MessageDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not authorized to modify this book", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_book(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(book_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    BookService::new(&state.db).delete(&user, book_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Book deleted successfully".to_string(),
        }),
    ))
}
