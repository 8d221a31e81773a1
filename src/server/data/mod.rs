//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations,
//! organized by domain (users, books, reviews). They are generic over the
//! connection so the same repository runs against the pooled connection or
//! inside a transaction.

pub mod book;
pub mod review;
pub mod user;
