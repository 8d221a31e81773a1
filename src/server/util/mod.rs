//! Utility helpers for server operations.
