use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use bookshelf::{
    model::book::BookInputDto,
    server::{
        controller::book::add_book,
        model::{app::AppState, auth::AuthUser},
    },
};
use bookshelf_test_utils::prelude::*;

use crate::util::response_json;

fn book_input() -> BookInputDto {
    BookInputDto {
        title: "Dune".to_string(),
        author: "Frank Herbert".to_string(),
        description: "Politics and prophecy on a desert planet.".to_string(),
        genre: "Science Fiction".to_string(),
        year: 1965,
    }
}

#[tokio::test]
/// Expect 201 with the created book, owned by the caller and with zeroed
/// rating fields
async fn creates_book_for_logged_in_user() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state: AppState = test.state();

    let user = fixtures::user::insert_user(&test.db, "Alice", "alice@example.com").await?;

    let result = add_book(State(state), AuthUser(user.clone()), Json(book_input())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = response_json(resp).await;
    assert_eq!(body["message"], "Book added successfully");
    assert_eq!(body["book"]["title"], "Dune");
    assert_eq!(body["book"]["averageRating"], 0.0);
    assert_eq!(body["book"]["totalReviews"], 0);
    assert_eq!(body["book"]["addedBy"]["id"], user.id);

    Ok(())
}

#[tokio::test]
/// Expect 400 with field errors when the input fails validation
async fn rejects_invalid_input() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state: AppState = test.state();

    let user = fixtures::user::insert_user(&test.db, "Alice", "alice@example.com").await?;

    let mut input = book_input();
    input.title = "   ".to_string();
    input.year = 999;

    let result = add_book(State(state), AuthUser(user), Json(input)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = response_json(resp).await;
    assert_eq!(body["message"], "Validation failed");
    assert_eq!(body["errors"].as_array().unwrap().len(), 2);

    Ok(())
}
