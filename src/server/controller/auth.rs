use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorsDto},
        auth::{AuthDto, LoginDto, RegisterDto},
    },
    server::{error::Error, model::app::AppState, service::auth::AuthService, validate},
};

pub static AUTH_TAG: &str = "auth";

/// Register a new account
///
/// Creates the user and immediately issues a bearer token, so no separate
/// login call is needed after registration.
///
/// # Responses
/// - 201 (Created): Account created, body carries the token and user
/// - 400 (Bad Request): Validation failed or the email is already registered
/// - 500 (Internal Server Error): A database or hashing error occurred
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = AuthDto),
        (status = 400, description = "Validation failed or email already registered", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterDto>,
) -> Result<impl IntoResponse, Error> {
    let input = validate::register(input)?;

    let auth = AuthService::new(&state.db, &state.jwt).register(input).await?;

    Ok((StatusCode::CREATED, Json(auth)))
}

/// Log in with email and password
///
/// # Responses
/// - 200 (OK): Credentials accepted, body carries the token and user
/// - 400 (Bad Request): Unknown email or wrong password
/// - 500 (Internal Server Error): A database or hashing error occurred
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthDto),
        (status = 400, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let auth = AuthService::new(&state.db, &state.jwt).login(input).await?;

    Ok((StatusCode::OK, Json(auth)))
}
