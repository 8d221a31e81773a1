use sea_orm::{
    sea_query::Index, ConnectionTrait, Database, DatabaseConnection, DbBackend, Schema,
};

use crate::{constant::TEST_JWT_SECRET, error::TestError};

pub struct TestSetup {
    pub db: DatabaseConnection,
}

impl TestSetup {
    /// Connects to a fresh in-memory database and creates the application
    /// tables from the entity definitions.
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        let setup = TestSetup { db };
        setup.create_tables().await?;

        Ok(setup)
    }

    /// Convert the test database handle into the application's state type.
    /// Conversion through a `From` impl on the caller's side avoids a
    /// circular dependency on the application crate.
    ///
    /// # Example
    /// ```ignore
    /// let state: AppState = test.state();
    /// ```
    pub fn state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, String)>,
    {
        T::from((self.db.clone(), TEST_JWT_SECRET.to_string()))
    }

    async fn create_tables(&self) -> Result<(), TestError> {
        let schema = Schema::new(DbBackend::Sqlite);

        let stmts = vec![
            schema.create_table_from_entity(entity::prelude::User),
            schema.create_table_from_entity(entity::prelude::Book),
            schema.create_table_from_entity(entity::prelude::Review),
        ];

        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        // The migrations enforce one review per (book, user); mirror that
        // here so fixture data obeys the same constraint.
        let review_pair_index = Index::create()
            .name("idx_review_book_id_user_id")
            .table(entity::prelude::Review)
            .col(entity::review::Column::BookId)
            .col(entity::review::Column::UserId)
            .unique()
            .to_owned();

        self.db.execute(&review_pair_index).await?;

        Ok(())
    }
}
