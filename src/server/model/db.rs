//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models used throughout the
//! application, so call sites don't import from the `entity` crate directly.

/// A registered user: unique lowercase email, display name, bcrypt password
/// hash, and creation timestamp.
pub type UserModel = entity::user::Model;

/// A catalogued book. `average_rating` and `total_reviews` are derived from
/// the book's review set and only ever written by the rating service.
pub type BookModel = entity::book::Model;

/// A user's review of a book; at most one per (book, user) pair.
pub type ReviewModel = entity::review::Model;
