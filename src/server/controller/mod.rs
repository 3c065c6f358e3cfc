//! HTTP controller endpoints for the holonet web API.
//!
//! Axum handlers for user, character, planet, and favorite management.
//! Controllers parse the request, delegate to services, and map results to
//! HTTP responses. Every endpoint carries utoipa annotations for OpenAPI
//! documentation.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
