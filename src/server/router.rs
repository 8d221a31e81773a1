//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa annotations
//! collected into a single OpenAPI document, and Swagger UI is served at
//! `/api/docs` for interactive exploration.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger
/// UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/register` - Create an account and issue a token
/// - `POST /api/auth/login` - Log in with email and password
/// - `GET /api/books` - List books with search, filter, sort, pagination
/// - `GET /api/books/my-books` - List the logged in user's books
/// - `GET /api/books/{id}` - Get a single book
/// - `POST /api/books` - Add a book
/// - `PUT /api/books/{id}` - Update an owned book
/// - `DELETE /api/books/{id}` - Delete an owned book and its reviews
/// - `GET /api/reviews/book/{book_id}` - List a book's reviews
/// - `GET /api/reviews/my-reviews` - List the logged in user's reviews
/// - `GET /api/reviews/{id}` - Get a single review
/// - `POST /api/reviews` - Add a review
/// - `PUT /api/reviews/{id}` - Update an authored review
/// - `DELETE /api/reviews/{id}` - Delete an authored review
/// - `GET /api/health` - Liveness check
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Bookshelf", description = "Bookshelf API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::book::BOOK_TAG, description = "Book catalogue API routes"),
        (name = controller::review::REVIEW_TAG, description = "Book review API routes"),
        (name = controller::health::HEALTH_TAG, description = "Health check route"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::book::get_books, controller::book::add_book))
        .routes(routes!(controller::book::get_my_books))
        .routes(routes!(
            controller::book::get_book,
            controller::book::update_book,
            controller::book::delete_book
        ))
        .routes(routes!(controller::review::get_book_reviews))
        .routes(routes!(controller::review::get_my_reviews))
        .routes(routes!(controller::review::add_review))
        .routes(routes!(
            controller::review::get_review,
            controller::review::update_review,
            controller::review::delete_review
        ))
        .routes(routes!(controller::health::get_health))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
