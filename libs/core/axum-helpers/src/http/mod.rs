//! HTTP middleware module.
//!
//! This module provides HTTP-level middleware for:
//! - Security headers
//!
//! CORS is configured per-router in [`crate::server::create_router`] from
//! the `CORS_ALLOWED_ORIGIN` environment variable.

pub mod security;

// Re-export commonly used functions
pub use security::security_headers;
