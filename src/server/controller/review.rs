use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorsDto},
        review::{CreateReviewDto, ReviewDto, ReviewPayloadDto, UpdateReviewDto},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::review::ReviewService,
        validate,
    },
};

pub static REVIEW_TAG: &str = "review";

/// List reviews for a book
///
/// Newest first, each with its author's public identity.
///
/// # Responses
/// - 200 (OK): The book's reviews (empty list if there are none)
/// - 500 (Internal Server Error): A database error occurred
#[utoipa::path(
    get,
    path = "/api/reviews/book/{book_id}",
    tag = REVIEW_TAG,
    params(("book_id" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "The book's reviews", body = Vec<ReviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_book_reviews(
    State(state): State<AppState>,
    Path(book_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let reviews = ReviewService::new(&state.db).list_by_book(book_id).await?;

    Ok((StatusCode::OK, Json(reviews)))
}

/// List the logged in user's reviews
///
/// Newest first, each with the reviewed book's title and author attached.
///
/// # Responses
/// - 200 (OK): The user's reviews
/// - 401 (Unauthorized): No bearer token was provided
/// - 403 (Forbidden): The token was invalid or expired
/// - 500 (Internal Server Error): A database error occurred
#[utoipa::path(
    get,
    path = "/api/reviews/my-reviews",
    tag = REVIEW_TAG,
    responses(
        (status = 200, description = "The user's reviews", body = Vec<ReviewDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_reviews(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, Error> {
    let reviews = ReviewService::new(&state.db).list_by_user(&user).await?;

    Ok((StatusCode::OK, Json(reviews)))
}

/// Get a single review
///
/// # Responses
/// - 200 (OK): The review with its author and book attached
/// - 404 (Not Found): No review exists with this id
/// - 500 (Internal Server Error): A database error occurred
#[utoipa::path(
    get,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Review id")),
    responses(
        (status = 200, description = "The requested review", body = ReviewDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_review(
    State(state): State<AppState>,
    Path(review_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let review = ReviewService::new(&state.db).get(review_id).await?;

    Ok((StatusCode::OK, Json(review)))
}

/// Add a review
///
/// One review per user per book. The book's average rating and review
/// count are updated in the same transaction.
///
/// # Responses
/// - 201 (Created): The review was added
/// - 400 (Bad Request): Validation failed, or the user already reviewed this book
/// - 401 (Unauthorized): No bearer token was provided
/// - 403 (Forbidden): The token was invalid or expired
/// - 404 (Not Found): The reviewed book does not exist
/// - 500 (Internal Server Error): A database error occurred
#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review added", body = ReviewPayloadDto),
        (status = 400, description = "Validation failed or duplicate review", body = ValidationErrorsDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_review(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(input): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, Error> {
    let input = validate::create_review(input)?;

    let review = ReviewService::new(&state.db).create(&user, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(ReviewPayloadDto {
            message: "Review added successfully".to_string(),
            review,
        }),
    ))
}

/// Update a review
///
/// Only the review's author may update it. The book's average rating is
/// recomputed in the same transaction.
///
/// # Responses
/// - 200 (OK): The review was updated
/// - 400 (Bad Request): Validation failed
/// - 401 (Unauthorized): No bearer token was provided
/// - 403 (Forbidden): The token was invalid, or the user is not the author
/// - 404 (Not Found): No review exists with this id
/// - 500 (Internal Server Error): A database error occurred
#[utoipa::path(
    put,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Review id")),
    request_body = UpdateReviewDto,
    responses(
        (status = 200, description = "Review updated", body = ReviewPayloadDto),
        (status = 400, description = "Validation failed", body = ValidationErrorsDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not authorized to modify this review", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_review(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(review_id): Path<i32>,
    Json(input): Json<UpdateReviewDto>,
) -> Result<impl IntoResponse, Error> {
    let input = validate::update_review(input)?;

    let review = ReviewService::new(&state.db)
        .update(&user, review_id, input)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ReviewPayloadDto {
            message: "Review updated successfully".to_string(),
            review,
        }),
    ))
}

/// Delete a review
///
/// Only the review's author may delete it. The book's average rating is
/// recomputed in the same transaction.
///
/// # Responses
/// - 200 (OK): The review was deleted
/// - 401 (Unauthorized): No bearer token was provided
/// - 403 (Forbidden): The token was invalid, or the user is not the author
/// - 404 (Not Found): No review exists with this id
/// - 500 (Internal Server Error): A database error occurred
#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review deleted", body = MessageDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not authorized to modify this review", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(review_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    ReviewService::new(&state.db).delete(&user, review_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Review deleted successfully".to_string(),
        }),
    ))
}
