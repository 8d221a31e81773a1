use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use bookshelf::server::{
    controller::review::delete_review,
    model::{app::AppState, auth::AuthUser},
};
use bookshelf_test_utils::prelude::*;
use sea_orm::EntityTrait;

use crate::util::response_json;

#[tokio::test]
/// Expect 200 and the book's rating fields reset once its last review is gone
async fn author_deletes_review_and_rating_resets() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state: AppState = test.state();

    let user = fixtures::user::insert_user(&test.db, "Alice", "alice@example.com").await?;
    let book = fixtures::book::insert_book(&test.db, user.id, "1984").await?;
    let review = fixtures::review::insert_review(&test.db, book.id, user.id, 4).await?;

    let result = delete_review(State(state), AuthUser(user), Path(review.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = response_json(resp).await;
    assert_eq!(body["message"], "Review deleted successfully");

    let reloaded = entity::prelude::Book::find_by_id(book.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(reloaded.average_rating, 0.0);
    assert_eq!(reloaded.total_reviews, 0);

    Ok(())
}

#[tokio::test]
/// Expect 403 and the review kept when a non-author attempts the delete
async fn rejects_non_author() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state: AppState = test.state();

    let author = fixtures::user::insert_user(&test.db, "Alice", "alice@example.com").await?;
    let other = fixtures::user::insert_user(&test.db, "Bob", "bob@example.com").await?;
    let book = fixtures::book::insert_book(&test.db, author.id, "1984").await?;
    let review = fixtures::review::insert_review(&test.db, book.id, author.id, 4).await?;

    let result = delete_review(State(state), AuthUser(other), Path(review.id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    assert!(entity::prelude::Review::find_by_id(review.id)
        .one(&test.db)
        .await?
        .is_some());

    Ok(())
}

#[tokio::test]
/// Expect 404 when the review does not exist
async fn returns_not_found_for_missing_review() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state: AppState = test.state();

    let user = fixtures::user::insert_user(&test.db, "Alice", "alice@example.com").await?;

    let result = delete_review(State(state), AuthUser(user), Path(42)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
