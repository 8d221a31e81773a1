//! HTTP controller endpoints for the bookshelf web API.
//!
//! Controllers handle HTTP requests, validate inputs, call services, and
//! shape responses. Authenticated routes take the [`AuthUser`] extractor,
//! which resolves the bearer token to a user before the handler runs.
//! Every handler carries a utoipa annotation for the OpenAPI document.
//!
//! [`AuthUser`]: crate::server::model::auth::AuthUser

pub mod auth;
pub mod book;
pub mod health;
pub mod review;
