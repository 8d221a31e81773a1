//! Fixture insertion helpers.
//!
//! These write rows directly through the entity layer, so derived fields
//! such as a book's average rating are whatever the fixture sets them to.
//! Tests exercising rating maintenance should go through the API instead.

pub mod book;
pub mod review;
pub mod user;
