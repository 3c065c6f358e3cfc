use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        planet::{CreatePlanetDto, PlanetDto, UpdatePlanetDto},
    },
    server::{error::Error, model::app::AppState, service::planet::PlanetService},
};

pub static PLANET_TAG: &str = "planet";

/// Create a new planet
#[utoipa::path(
    post,
    path = "/api/planets",
    tag = PLANET_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 201, description = "Planet created", body = PlanetDto),
        (status = 404, description = "Required fields missing from payload", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    Json(payload): Json<CreatePlanetDto>,
) -> Result<impl IntoResponse, Error> {
    let planet = PlanetService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(planet)))
}

/// Get all planets
#[utoipa::path(
    get,
    path = "/api/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "All planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = PlanetService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(planets)))
}

/// Get a single planet by id
#[utoipa::path(
    get,
    path = "/api/planets/{id}",
    tag = PLANET_TAG,
    params(
        ("id" = i32, Path, description = "Planet id")
    ),
    responses(
        (status = 200, description = "The requested planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet = PlanetService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(planet)))
}

/// Update a planet; only supplied fields change
#[utoipa::path(
    put,
    path = "/api/planets/{id}",
    tag = PLANET_TAG,
    params(
        ("id" = i32, Path, description = "Planet id")
    ),
    request_body = UpdatePlanetDto,
    responses(
        (status = 200, description = "The updated planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePlanetDto>,
) -> Result<impl IntoResponse, Error> {
    let planet = PlanetService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(planet)))
}

/// Delete a planet
#[utoipa::path(
    delete,
    path = "/api/planets/{id}",
    tag = PLANET_TAG,
    params(
        ("id" = i32, Path, description = "Planet id")
    ),
    responses(
        (status = 200, description = "Planet deleted", body = MessageDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    PlanetService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Planet deleted successfully".to_string(),
        }),
    ))
}
