//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI
//! documentation using utoipa. All API endpoints are registered here with
//! their OpenAPI specifications, and Swagger UI is configured to provide
//! interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI.
///
/// Handlers sharing a path are registered in the same `routes!` invocation so
/// their methods merge onto one route. The collected OpenAPI document is
/// served at `/api/docs/openapi.json` with Swagger UI at `/api/docs`.
///
/// # Registered Endpoints
/// - `POST/GET /api/users` plus `GET/PUT/DELETE /api/users/{id}` - user CRUD
/// - `GET /api/users/{id}/favorites` - favorites listing
/// - `POST/DELETE /api/users/{id}/favorites/characters/{character_id}`
/// - `POST/DELETE /api/users/{id}/favorites/planets/{planet_id}`
/// - `POST/GET /api/characters` plus `GET/PUT/DELETE /api/characters/{id}`
/// - `POST/GET /api/planets` plus `GET/PUT/DELETE /api/planets/{id}`
///
/// # Returns
/// An Axum `Router<AppState>` ready to be served once state is attached.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holonet", description = "Holonet API"), tags(
        (name = controller::user::USER_TAG, description = "User account API routes"),
        (name = controller::character::CHARACTER_TAG, description = "Character catalog API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet catalog API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite management API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::user::create_user,
            controller::user::get_users
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user,
            controller::user::delete_user
        ))
        .routes(routes!(controller::favorite::get_user_favorites))
        .routes(routes!(
            controller::favorite::add_favorite_character,
            controller::favorite::remove_favorite_character
        ))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::remove_favorite_planet
        ))
        .routes(routes!(
            controller::character::create_character,
            controller::character::get_characters
        ))
        .routes(routes!(
            controller::character::get_character,
            controller::character::update_character,
            controller::character::delete_character
        ))
        .routes(routes!(
            controller::planet::create_planet,
            controller::planet::get_planets
        ))
        .routes(routes!(
            controller::planet::get_planet,
            controller::planet::update_planet,
            controller::planet::delete_planet
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
