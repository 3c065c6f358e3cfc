//! Tests for HTTP controller endpoints.
//!
//! Integration tests invoking the application's handlers directly with axum
//! extractors, verifying status codes and response bodies for the full API
//! surface.

mod character;
mod favorite;
mod planet;
mod user;
