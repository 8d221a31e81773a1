use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::{
        auth::{AuthDto, LoginDto, RegisterDto},
        user::UserDto,
    },
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        model::auth::JwtKeys,
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtKeys,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtKeys) -> Self {
        Self { db, jwt }
    }

    /// Registers a new user and issues their first bearer token.
    ///
    /// Emails are normalized to lowercase before the uniqueness check so
    /// registration is case-insensitive on email.
    pub async fn register(&self, input: RegisterDto) -> Result<AuthDto, Error> {
        let user_repository = UserRepository::new(self.db);

        let email = input.email.trim().to_lowercase();

        if user_repository.get_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken(email).into());
        }

        let password_hash = bcrypt::hash(&input.password, bcrypt::DEFAULT_COST)?;

        // The uniqueness check above can race a concurrent registration;
        // the unique index on email then rejects this insert, which still
        // has to read as the email conflict.
        let user = match user_repository
            .create(input.name.trim(), &email, &password_hash)
            .await
        {
            Ok(user) => user,
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(AuthError::EmailTaken(email).into());
            }
            Err(err) => return Err(err.into()),
        };

        let token = self.jwt.issue(user.id)?;

        Ok(AuthDto {
            token,
            user: UserDto::from(user),
        })
    }

    /// Verifies credentials and issues a bearer token.
    ///
    /// An unknown email and a wrong password produce the same error so the
    /// response does not reveal which accounts exist.
    pub async fn login(&self, input: LoginDto) -> Result<AuthDto, Error> {
        let email = input.email.trim().to_lowercase();

        let user = UserRepository::new(self.db)
            .get_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !bcrypt::verify(&input.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.jwt.issue(user.id)?;

        Ok(AuthDto {
            token,
            user: UserDto::from(user),
        })
    }
}
