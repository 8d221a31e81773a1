//! Bookshelf: a book catalogue and review platform.
//!
//! The crate exposes a REST API for registering users, listing and searching
//! books, and posting reviews. Each book carries an average rating and review
//! count derived from its review set.

pub mod model;
pub mod server;
