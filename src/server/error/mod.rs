//! Error types for the holonet server.
//!
//! Domain-specific error enums (validation, resource lookup, favorites,
//! configuration) aggregate into a single [`Error`] type. All errors
//! implement `IntoResponse` for Axum HTTP responses and use `thiserror` for
//! ergonomic definitions with automatic `Display` implementations.

pub mod config;
pub mod favorite;
pub mod resource;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError, favorite::FavoriteError, resource::ResourceError,
        validation::ValidationError,
    },
};

/// Main error type for the holonet server.
///
/// Aggregates the domain-specific error enums and database errors into a
/// single unified type, with `#[from]` conversions so the `?` operator works
/// across layers. The `IntoResponse` implementation maps every error to the
/// HTTP response the API contract expects.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Payload validation error (required fields missing on create).
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Entity lookup error (user/character/planet id does not exist).
    #[error(transparent)]
    ResourceError(#[from] ResourceError),
    /// Favorite association error (missing association or empty listing).
    #[error(transparent)]
    FavoriteError(#[from] FavoriteError),
    /// Database error (query failures, connection issues). Treated as fatal
    /// for the operation; nothing is retried.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::ResourceError(err) => err.into_response(),
            Self::FavoriteError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error message for debugging but returns a generic message
/// to the client so implementation details never leak.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
