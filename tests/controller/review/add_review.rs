use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use bookshelf::{
    model::review::CreateReviewDto,
    server::{
        controller::review::add_review,
        model::{app::AppState, auth::AuthUser},
    },
};
use bookshelf_test_utils::prelude::*;
use sea_orm::EntityTrait;

use crate::util::response_json;

fn review_input(book_id: i32, rating: i32) -> CreateReviewDto {
    CreateReviewDto {
        book_id,
        rating,
        review_text: "A bleak but essential read.".to_string(),
    }
}

#[tokio::test]
/// Expect 201 and the book's rating fields updated in the same request
async fn creates_review_and_updates_book_rating() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state: AppState = test.state();

    let owner = fixtures::user::insert_user(&test.db, "Alice", "alice@example.com").await?;
    let reviewer = fixtures::user::insert_user(&test.db, "Bob", "bob@example.com").await?;
    let book = fixtures::book::insert_book(&test.db, owner.id, "1984").await?;

    let result = add_review(
        State(state),
        AuthUser(reviewer.clone()),
        Json(review_input(book.id, 4)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = response_json(resp).await;
    assert_eq!(body["message"], "Review added successfully");
    assert_eq!(body["review"]["rating"], 4);
    assert_eq!(body["review"]["user"]["id"], reviewer.id);

    let reloaded = entity::prelude::Book::find_by_id(book.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(reloaded.average_rating, 4.0);
    assert_eq!(reloaded.total_reviews, 1);

    Ok(())
}

#[tokio::test]
/// Expect 400 when the user has already reviewed the book
async fn rejects_second_review_of_same_book() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state: AppState = test.state();

    let user = fixtures::user::insert_user(&test.db, "Alice", "alice@example.com").await?;
    let book = fixtures::book::insert_book(&test.db, user.id, "1984").await?;

    add_review(
        State(test.state()),
        AuthUser(user.clone()),
        Json(review_input(book.id, 4)),
    )
    .await
    .unwrap();

    let result = add_review(State(state), AuthUser(user), Json(review_input(book.id, 1))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 404 when the reviewed book does not exist
async fn rejects_review_of_missing_book() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state: AppState = test.state();

    let user = fixtures::user::insert_user(&test.db, "Alice", "alice@example.com").await?;

    let result = add_review(State(state), AuthUser(user), Json(review_input(42, 4))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 400 with field errors for an out-of-range rating
async fn rejects_invalid_rating() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state: AppState = test.state();

    let user = fixtures::user::insert_user(&test.db, "Alice", "alice@example.com").await?;
    let book = fixtures::book::insert_book(&test.db, user.id, "1984").await?;

    let result = add_review(State(state), AuthUser(user), Json(review_input(book.id, 6))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = response_json(resp).await;
    assert_eq!(body["errors"][0]["field"], "rating");

    Ok(())
}
