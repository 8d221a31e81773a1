//! Shared helpers for integration tests: an in-memory database with the
//! application schema, plus fixture insertion for users, books, and reviews.

pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        constant::{TEST_JWT_SECRET, TEST_PASSWORD},
        fixtures, TestError, TestSetup,
    };
}
