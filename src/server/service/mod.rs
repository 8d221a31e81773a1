//! Service layer for business logic and orchestration.
//!
//! Services coordinate repositories and enforce the application's
//! invariants: credential handling and token issuance, book ownership,
//! review uniqueness, and the derived rating fields kept consistent with
//! each book's review set.

pub mod auth;
pub mod book;
pub mod rating;
pub mod review;
