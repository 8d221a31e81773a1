use axum::{extract::State, http::StatusCode, response::IntoResponse};
use bookshelf::server::{
    controller::review::get_my_reviews,
    model::{app::AppState, auth::AuthUser},
};
use bookshelf_test_utils::prelude::*;

use crate::util::response_json;

#[tokio::test]
/// Expect only the caller's reviews, each with the reviewed book attached
async fn lists_only_own_reviews_with_books() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state: AppState = test.state();

    let alice = fixtures::user::insert_user(&test.db, "Alice", "alice@example.com").await?;
    let bob = fixtures::user::insert_user(&test.db, "Bob", "bob@example.com").await?;
    let book = fixtures::book::insert_book(&test.db, alice.id, "1984").await?;
    let other_book = fixtures::book::insert_book(&test.db, alice.id, "Dune").await?;

    fixtures::review::insert_review(&test.db, book.id, alice.id, 5).await?;
    fixtures::review::insert_review(&test.db, other_book.id, alice.id, 3).await?;
    fixtures::review::insert_review(&test.db, book.id, bob.id, 2).await?;

    let result = get_my_reviews(State(state), AuthUser(alice.clone())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = response_json(resp).await;
    let reviews = body.as_array().unwrap();
    assert_eq!(reviews.len(), 2);
    assert!(reviews.iter().all(|r| r["user"]["id"] == alice.id));
    assert!(reviews.iter().all(|r| r["book"]["title"].is_string()));

    Ok(())
}

#[tokio::test]
/// Expect an empty list for a user who has written no reviews
async fn returns_empty_list_without_reviews() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state: AppState = test.state();

    let user = fixtures::user::insert_user(&test.db, "Alice", "alice@example.com").await?;

    let resp = get_my_reviews(State(state), AuthUser(user))
        .await
        .unwrap()
        .into_response();

    let body = response_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 0);

    Ok(())
}
