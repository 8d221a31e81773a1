use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use bookshelf::server::{controller::review::get_book_reviews, model::app::AppState};
use bookshelf_test_utils::prelude::*;

use crate::util::response_json;

#[tokio::test]
/// Expect the book's reviews with each author's public identity attached
async fn lists_reviews_with_authors() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state: AppState = test.state();

    let alice = fixtures::user::insert_user(&test.db, "Alice", "alice@example.com").await?;
    let bob = fixtures::user::insert_user(&test.db, "Bob", "bob@example.com").await?;
    let book = fixtures::book::insert_book(&test.db, alice.id, "1984").await?;
    let other_book = fixtures::book::insert_book(&test.db, alice.id, "Dune").await?;

    fixtures::review::insert_review(&test.db, book.id, alice.id, 5).await?;
    fixtures::review::insert_review(&test.db, book.id, bob.id, 3).await?;
    fixtures::review::insert_review(&test.db, other_book.id, bob.id, 4).await?;

    let result = get_book_reviews(State(state), Path(book.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = response_json(resp).await;
    let reviews = body.as_array().unwrap();
    assert_eq!(reviews.len(), 2);
    assert!(reviews.iter().all(|r| r["bookId"] == book.id));
    assert!(reviews.iter().all(|r| r["user"]["name"].is_string()));

    Ok(())
}

#[tokio::test]
/// Expect an empty list for a book with no reviews
async fn returns_empty_list_for_unreviewed_book() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state: AppState = test.state();

    let user = fixtures::user::insert_user(&test.db, "Alice", "alice@example.com").await?;
    let book = fixtures::book::insert_book(&test.db, user.id, "1984").await?;

    let resp = get_book_reviews(State(state), Path(book.id))
        .await
        .unwrap()
        .into_response();

    let body = response_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 0);

    Ok(())
}
