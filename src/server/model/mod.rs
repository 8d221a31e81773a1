//! Server application models and type definitions.
//!
//! Application state shared across handlers, bearer-token authentication
//! types, and database model type aliases.

pub mod app;
pub mod auth;
pub mod db;
