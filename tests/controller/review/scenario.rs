//! Walks the whole review lifecycle through the API: two users register,
//! one lists a book, the other reviews it, is refused a second review, and
//! finally deletes the first one. The book's derived rating fields are
//! checked after every step.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use bookshelf::{
    model::{auth::RegisterDto, book::BookInputDto, review::CreateReviewDto},
    server::{
        controller::{auth::register, book::add_book, book::get_book, review::add_review,
            review::delete_review},
        model::{app::AppState, auth::AuthUser},
    },
};
use bookshelf_test_utils::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde_json::Value;

use crate::util::response_json;

async fn register_user(
    state: &AppState,
    db: &sea_orm::DatabaseConnection,
    name: &str,
    email: &str,
) -> entity::user::Model {
    let resp = register(
        State(state.clone()),
        Json(RegisterDto {
            name: name.to_string(),
            email: email.to_string(),
            password: TEST_PASSWORD.to_string(),
        }),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    entity::prelude::User::find()
        .filter(entity::user::Column::Email.eq(email))
        .one(db)
        .await
        .unwrap()
        .expect("registered user should exist")
}

async fn book_rating(state: &AppState, book_id: i32) -> Value {
    let resp = get_book(State(state.clone()), Path(book_id))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    response_json(resp).await
}

#[tokio::test]
/// The derived rating fields track the review set across the full flow:
/// create, rejected duplicate, delete
async fn review_lifecycle_keeps_rating_consistent() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let state: AppState = test.state();

    let alice = register_user(&state, &test.db, "Alice", "alice@example.com").await;
    let bob = register_user(&state, &test.db, "Bob", "bob@example.com").await;

    // Alice lists the book; it starts unrated
    let resp = add_book(
        State(state.clone()),
        AuthUser(alice),
        Json(BookInputDto {
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
            description: "A dystopian novel about surveillance.".to_string(),
            genre: "Fiction".to_string(),
            year: 1949,
        }),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = response_json(resp).await;
    let book_id = body["book"]["id"].as_i64().unwrap() as i32;
    assert_eq!(body["book"]["averageRating"], 0.0);
    assert_eq!(body["book"]["totalReviews"], 0);

    // Bob reviews it with rating 4
    let resp = add_review(
        State(state.clone()),
        AuthUser(bob.clone()),
        Json(CreateReviewDto {
            book_id,
            rating: 4,
            review_text: "A bleak but essential read.".to_string(),
        }),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = response_json(resp).await;
    let review_id = body["review"]["id"].as_i64().unwrap() as i32;

    let book = book_rating(&state, book_id).await;
    assert_eq!(book["averageRating"], 4.0);
    assert_eq!(book["totalReviews"], 1);

    // Bob's second review of the same book is rejected and changes nothing
    let result = add_review(
        State(state.clone()),
        AuthUser(bob.clone()),
        Json(CreateReviewDto {
            book_id,
            rating: 1,
            review_text: "Changed my mind about this one.".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let book = book_rating(&state, book_id).await;
    assert_eq!(book["averageRating"], 4.0);
    assert_eq!(book["totalReviews"], 1);

    // Bob deletes his review; the book's rating resets
    let resp = delete_review(State(state.clone()), AuthUser(bob), Path(review_id))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let book = book_rating(&state, book_id).await;
    assert_eq!(book["averageRating"], 0.0);
    assert_eq!(book["totalReviews"], 0);

    Ok(())
}
