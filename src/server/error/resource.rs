use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Lookup failures for the core entities.
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("User ID {0} not found")]
    UserNotFound(i32),
    #[error("Character ID {0} not found")]
    CharacterNotFound(i32),
    #[error("Planet ID {0} not found")]
    PlanetNotFound(i32),
}

impl ResourceError {
    fn message(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "User not found",
            Self::CharacterNotFound(_) => "Character not found",
            Self::PlanetNotFound(_) => "Planet not found",
        }
    }
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: self.message().to_string(),
            }),
        )
            .into_response()
    }
}
