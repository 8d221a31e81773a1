use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use bookshelf::{
    model::book::PageParams,
    server::{
        controller::book::get_my_books,
        model::{app::AppState, auth::AuthUser},
    },
};
use bookshelf_test_utils::prelude::*;

use crate::util::response_json;

#[tokio::test]
/// Expect only the caller's own books, with pagination metadata
async fn lists_only_own_books() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state: AppState = test.state();

    let alice = fixtures::user::insert_user(&test.db, "Alice", "alice@example.com").await?;
    let bob = fixtures::user::insert_user(&test.db, "Bob", "bob@example.com").await?;

    fixtures::book::insert_book(&test.db, alice.id, "Dune").await?;
    fixtures::book::insert_book(&test.db, alice.id, "Emma").await?;
    fixtures::book::insert_book(&test.db, bob.id, "1984").await?;

    let result = get_my_books(State(state), AuthUser(alice), Query(PageParams::default())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = response_json(resp).await;
    let books = body["books"].as_array().unwrap();
    assert_eq!(books.len(), 2);
    assert!(books.iter().all(|b| b["title"] != "1984"));
    assert_eq!(body["pagination"]["totalBooks"], 2);

    Ok(())
}

#[tokio::test]
/// Expect an empty page for a user with no books
async fn returns_empty_page_for_user_without_books() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state: AppState = test.state();

    let user = fixtures::user::insert_user(&test.db, "Alice", "alice@example.com").await?;

    let resp = get_my_books(State(state), AuthUser(user), Query(PageParams::default()))
        .await
        .unwrap()
        .into_response();

    let body = response_json(resp).await;
    assert_eq!(body["books"].as_array().unwrap().len(), 0);
    assert_eq!(body["pagination"]["totalPages"], 0);

    Ok(())
}
