use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures while creating, removing, or listing favorite associations.
#[derive(Error, Debug)]
pub enum FavoriteError {
    #[error("User ID {user_id} or character ID {character_id} not found")]
    UserOrCharacterNotFound { user_id: i32, character_id: i32 },
    #[error("User ID {user_id} or planet ID {planet_id} not found")]
    UserOrPlanetNotFound { user_id: i32, planet_id: i32 },
    #[error("No favorite character entry for user ID {user_id} and character ID {character_id}")]
    CharacterNotFavorited { user_id: i32, character_id: i32 },
    #[error("No favorite planet entry for user ID {user_id} and planet ID {planet_id}")]
    PlanetNotFavorited { user_id: i32, planet_id: i32 },
    #[error("User ID {0} has no favorites")]
    NoFavorites(i32),
}

impl FavoriteError {
    fn message(&self) -> &'static str {
        match self {
            Self::UserOrCharacterNotFound { .. } => "User or character not found",
            Self::UserOrPlanetNotFound { .. } => "User or planet not found",
            Self::CharacterNotFavorited { .. } | Self::PlanetNotFavorited { .. } => {
                "Favorite not found"
            }
            Self::NoFavorites(_) => "User has no favorites",
        }
    }
}

impl IntoResponse for FavoriteError {
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
