use sea_orm::DatabaseConnection;

use crate::server::model::auth::JwtKeys;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt: JwtKeys,
}

/// Allows test utilities to build an `AppState` without depending on this
/// crate, by converting from the database handle and JWT secret.
impl From<(DatabaseConnection, String)> for AppState {
    fn from((db, jwt_secret): (DatabaseConnection, String)) -> Self {
        Self {
            db,
            jwt: JwtKeys::new(jwt_secret.as_bytes()),
        }
    }
}
