use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use bookshelf::{
    model::book::BookInputDto,
    server::{
        controller::book::update_book,
        model::{app::AppState, auth::AuthUser},
    },
};
use bookshelf_test_utils::prelude::*;

use crate::util::response_json;

fn updated_input() -> BookInputDto {
    BookInputDto {
        title: "Dune Messiah".to_string(),
        author: "Frank Herbert".to_string(),
        description: "The sequel, twelve years into Paul's reign.".to_string(),
        genre: "Science Fiction".to_string(),
        year: 1969,
    }
}

#[tokio::test]
/// Expect 200 with the updated fields when the owner updates their book
async fn owner_updates_book() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state: AppState = test.state();

    let user = fixtures::user::insert_user(&test.db, "Alice", "alice@example.com").await?;
    let book = fixtures::book::insert_book(&test.db, user.id, "Dune").await?;

    let result = update_book(
        State(state),
        AuthUser(user),
        Path(book.id),
        Json(updated_input()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = response_json(resp).await;
    assert_eq!(body["message"], "Book updated successfully");
    assert_eq!(body["book"]["title"], "Dune Messiah");
    assert_eq!(body["book"]["year"], 1969);

    Ok(())
}

#[tokio::test]
/// Expect 403 when a user other than the owner attempts the update
async fn rejects_non_owner() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state: AppState = test.state();

    let owner = fixtures::user::insert_user(&test.db, "Alice", "alice@example.com").await?;
    let other = fixtures::user::insert_user(&test.db, "Bob", "bob@example.com").await?;
    let book = fixtures::book::insert_book(&test.db, owner.id, "Dune").await?;

    let result = update_book(
        State(state),
        AuthUser(other),
        Path(book.id),
        Json(updated_input()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect 404 when the book does not exist
async fn returns_not_found_for_missing_book() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state: AppState = test.state();

    let user = fixtures::user::insert_user(&test.db, "Alice", "alice@example.com").await?;

    let result = update_book(State(state), AuthUser(user), Path(42), Json(updated_input())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
