use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::{FavoriteCharacterDto, FavoritePlanetDto, UserFavoritesDto},
    },
    server::{error::Error, model::app::AppState, service::favorite::FavoriteService},
};

pub static FAVORITE_TAG: &str = "favorite";

/// Get a user's favorite characters and planets
#[utoipa::path(
    get,
    path = "/api/users/{id}/favorites",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "The user's favorites, grouped by kind", body = UserFavoritesDto),
        (status = 404, description = "User has no favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteService::new(&state.db).list(id).await?;

    Ok((StatusCode::OK, Json(favorites)))
}

/// Add a character to a user's favorites
#[utoipa::path(
    post,
    path = "/api/users/{id}/favorites/characters/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "User id"),
        ("character_id" = i32, Path, description = "Character id")
    ),
    responses(
        (status = 201, description = "Favorite created", body = FavoriteCharacterDto),
        (status = 404, description = "User or character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    Path((id, character_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite = FavoriteService::new(&state.db)
        .add_character(id, character_id)
        .await?;

    Ok((StatusCode::CREATED, Json(favorite)))
}

/// Remove a character from a user's favorites
///
/// When the same character was favorited more than once, a single entry is
/// removed per call.
#[utoipa::path(
    delete,
    path = "/api/users/{id}/favorites/characters/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "User id"),
        ("character_id" = i32, Path, description = "Character id")
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MessageDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_character(
    State(state): State<AppState>,
    Path((id, character_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db)
        .remove_character(id, character_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Character removed from favorites".to_string(),
        }),
    ))
}

/// Add a planet to a user's favorites
#[utoipa::path(
    post,
    path = "/api/users/{id}/favorites/planets/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "User id"),
        ("planet_id" = i32, Path, description = "Planet id")
    ),
    responses(
        (status = 201, description = "Favorite created", body = FavoritePlanetDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path((id, planet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite = FavoriteService::new(&state.db)
        .add_planet(id, planet_id)
        .await?;

    Ok((StatusCode::CREATED, Json(favorite)))
}

/// Remove a planet from a user's favorites
#[utoipa::path(
    delete,
    path = "/api/users/{id}/favorites/planets/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "User id"),
        ("planet_id" = i32, Path, description = "Planet id")
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MessageDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    Path((id, planet_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db)
        .remove_planet(id, planet_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Planet removed from favorites".to_string(),
        }),
    ))
}
