use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        character::{CharacterDto, CreateCharacterDto, UpdateCharacterDto},
    },
    server::{error::Error, model::app::AppState, service::character::CharacterService},
};

pub static CHARACTER_TAG: &str = "character";

/// Create a new character
#[utoipa::path(
    post,
    path = "/api/characters",
    tag = CHARACTER_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 201, description = "Character created", body = CharacterDto),
        (status = 404, description = "Required fields missing from payload", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    Json(payload): Json<CreateCharacterDto>,
) -> Result<impl IntoResponse, Error> {
    let character = CharacterService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(character)))
}

/// Get all characters
#[utoipa::path(
    get,
    path = "/api/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "All characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let characters = CharacterService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(characters)))
}

/// Get a single character by id
#[utoipa::path(
    get,
    path = "/api/characters/{id}",
    tag = CHARACTER_TAG,
    params(
        ("id" = i32, Path, description = "Character id")
    ),
    responses(
        (status = 200, description = "The requested character", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let character = CharacterService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(character)))
}

/// Update a character; only supplied fields change
#[utoipa::path(
    put,
    path = "/api/characters/{id}",
    tag = CHARACTER_TAG,
    params(
        ("id" = i32, Path, description = "Character id")
    ),
    request_body = UpdateCharacterDto,
    responses(
        (status = 200, description = "The updated character", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_character(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCharacterDto>,
) -> Result<impl IntoResponse, Error> {
    let character = CharacterService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(character)))
}

/// Delete a character
#[utoipa::path(
    delete,
    path = "/api/characters/{id}",
    tag = CHARACTER_TAG,
    params(
        ("id" = i32, Path, description = "Character id")
    ),
    responses(
        (status = 200, description = "Character deleted", body = MessageDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_character(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    CharacterService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Character deleted successfully".to_string(),
        }),
    ))
}
