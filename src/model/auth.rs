use serde::{Deserialize, Serialize};

use crate::model::user::UserDto;

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegisterDto {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Returned by both register and login: a bearer token plus the
/// authenticated user's public identity.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AuthDto {
    pub token: String,
    pub user: UserDto,
}
