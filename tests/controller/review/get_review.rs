use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use bookshelf::server::{controller::review::get_review, model::app::AppState};
use bookshelf_test_utils::prelude::*;

use crate::util::response_json;

#[tokio::test]
/// Expect 200 with the review, its author, and the reviewed book attached
async fn returns_review_with_author_and_book() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state: AppState = test.state();

    let user = fixtures::user::insert_user(&test.db, "Alice", "alice@example.com").await?;
    let book = fixtures::book::insert_book(&test.db, user.id, "1984").await?;
    let review = fixtures::review::insert_review(&test.db, book.id, user.id, 4).await?;

    let result = get_review(State(state), Path(review.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = response_json(resp).await;
    assert_eq!(body["rating"], 4);
    assert_eq!(body["user"]["name"], "Alice");
    assert_eq!(body["book"]["title"], "1984");

    Ok(())
}

#[tokio::test]
/// Expect 404 for a review id that does not exist
async fn returns_not_found_for_missing_review() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state: AppState = test.state();

    let result = get_review(State(state), Path(42)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
