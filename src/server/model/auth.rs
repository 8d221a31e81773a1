//! Bearer-token authentication for protected routes.
//!
//! Tokens are HS256 JWTs carrying the user's id. The [`AuthUser`] extractor
//! is the authorization gate: routes that take it as an argument reject
//! requests with a missing or malformed Authorization header (401) or an
//! invalid/expired token (403) before the handler body runs. Per-entity
//! ownership checks remain the responsibility of each mutation handler.

use axum::http::{header, request::Parts};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::app::AppState,
};

/// Issued tokens expire after this many days.
pub const TOKEN_TTL_DAYS: i64 = 7;

#[derive(Serialize, Deserialize)]
pub struct Claims {
    /// The authenticated user's id
    pub sub: i32,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Issue a signed token for the given user id
    pub fn issue(&self, user_id: i32) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Verify a token's signature and expiry, returning its claims
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}

/// The acting user, resolved from the request's bearer token.
pub struct AuthUser(pub entity::user::Model);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MissingToken)?;

        let claims = state.jwt.verify(token)?;

        let user = UserRepository::new(&state.db)
            .get_by_id(claims.sub)
            .await?
            .ok_or(AuthError::UserNotInDatabase(claims.sub))?;

        Ok(AuthUser(user))
    }
}
