use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};

use crate::{
    constant::{TEST_BCRYPT_COST, TEST_PASSWORD},
    error::TestError,
};

/// Inserts a user whose password is [`TEST_PASSWORD`].
///
/// [`TEST_PASSWORD`]: crate::constant::TEST_PASSWORD
pub async fn insert_user<C: ConnectionTrait>(
    db: &C,
    name: &str,
    email: &str,
) -> Result<entity::user::Model, TestError> {
    let password_hash = bcrypt::hash(TEST_PASSWORD, TEST_BCRYPT_COST)?;

    let user = entity::user::ActiveModel {
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        password_hash: Set(password_hash),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(user)
}
