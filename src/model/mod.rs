//! Request and response data transfer objects for the Bookshelf API.
//!
//! Every endpoint has an explicit, typed request/response shape here rather
//! than passing open-ended maps through handlers. Field names serialize in
//! camelCase to match the wire format consumed by the web client.

pub mod api;
pub mod auth;
pub mod book;
pub mod review;
pub mod user;
