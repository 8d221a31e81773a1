use serde::{Deserialize, Serialize};

/// A user's public identity, embedded in book and review responses in place
/// of a bare user id. Never includes the password hash.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}
