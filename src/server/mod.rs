//! Server application core modules.
//!
//! This module contains all server-side functionality for the Bookshelf
//! application: HTTP routing, bearer-token authentication, request
//! validation, database repositories, and the services that keep each
//! book's derived rating fields consistent with its review set.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
pub mod validate;
