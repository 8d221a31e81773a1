use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error("Database error: {0}")]
    DbErr(#[from] sea_orm::DbErr),
    #[error("Password hashing error: {0}")]
    HashError(#[from] bcrypt::BcryptError),
}
