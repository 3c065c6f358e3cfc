//! Tests for favorite controller endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holonet::{
    model::{planet::CreatePlanetDto, user::CreateUserDto},
    server::controller::{
        favorite::{
            add_favorite_character, add_favorite_planet, get_user_favorites,
            remove_favorite_planet,
        },
        planet::create_planet,
        user::create_user,
    },
};
use holonet_test_utils::prelude::*;
use serde_json::json;

use crate::util::{error_response, response_json};

/// End-to-end favorites flow through the public handlers: create a user and
/// a planet, favorite the planet, then list the user's favorites.
#[tokio::test]
async fn favorites_flow_lists_favorited_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_star_tables().build().await?;

    let user_payload = CreateUserDto {
        username: Some("ana".to_string()),
        email: Some("a@a.com".to_string()),
        password: Some("x".to_string()),
        firstname: Some("Ana".to_string()),
        lastname: Some("Lee".to_string()),
    };
    let response = create_user(State(test.to_app_state()), Json(user_payload))
        .await
        .unwrap()
        .into_response();
    let user = response_json(response).await?;
    assert_eq!(user.get("id").unwrap(), 1);

    let planet_payload = CreatePlanetDto {
        name: Some("Tatooine".to_string()),
        population: Some(200_000),
        terrain: Some("desert".to_string()),
    };
    let response = create_planet(State(test.to_app_state()), Json(planet_payload))
        .await
        .unwrap()
        .into_response();
    let planet = response_json(response).await?;
    assert_eq!(planet.get("id").unwrap(), 1);

    let result = add_favorite_planet(State(test.to_app_state()), Path((1, 1))).await;
    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::CREATED);

    let result = get_user_favorites(State(test.to_app_state()), Path(1)).await;
    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await?;
    assert_eq!(
        body,
        json!({
            "planets": [{ "id": 1, "name": "Tatooine", "terrain": "desert" }],
            "characters": []
        })
    );

    Ok(())
}

/// The created association body embeds the serialized planet
#[tokio::test]
async fn add_favorite_planet_returns_association() -> Result<(), TestError> {
    let test = TestBuilder::new().with_star_tables().build().await?;
    let user = test.user().insert_user().await?;
    let planet = test.catalog().insert_planet().await?;

    let result = add_favorite_planet(State(test.to_app_state()), Path((user.id, planet.id))).await;

    assert!(result.is_ok());
    let body = response_json(result.unwrap().into_response()).await?;
    assert_eq!(
        body,
        json!({
            "id": 1,
            "user_id": user.id,
            "planet_id": planet.id,
            "planet": { "id": planet.id, "name": planet.name, "terrain": planet.terrain }
        })
    );

    Ok(())
}

/// The favorite character body exposes the character's id, not the row's
#[tokio::test]
async fn add_favorite_character_returns_character_projection() -> Result<(), TestError> {
    let test = TestBuilder::new().with_star_tables().build().await?;
    let user = test.user().insert_user().await?;
    test.catalog().insert_character_named("Chewbacca").await?;
    let character = test.catalog().insert_character_named("Leia Organa").await?;

    let result =
        add_favorite_character(State(test.to_app_state()), Path((user.id, character.id))).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await?;
    assert_eq!(
        body,
        json!({ "id": character.id, "name": "Leia Organa", "gender": character.gender })
    );

    Ok(())
}

/// Favoriting for a user that does not exist yields 404
#[tokio::test]
async fn add_favorite_for_unknown_user_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_star_tables().build().await?;
    let planet = test.catalog().insert_planet().await?;

    let result = add_favorite_planet(State(test.to_app_state()), Path((1, planet.id))).await;

    assert!(result.is_err());
    let response = error_response(result);
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await?;
    assert_eq!(body, json!({ "error": "User or planet not found" }));

    Ok(())
}

/// Removing an association that does not exist yields 404
#[tokio::test]
async fn remove_missing_favorite_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_star_tables().build().await?;
    let user = test.user().insert_user().await?;
    let planet = test.catalog().insert_planet().await?;

    let result =
        remove_favorite_planet(State(test.to_app_state()), Path((user.id, planet.id))).await;

    assert!(result.is_err());
    let response = error_response(result);
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// A user with no favorites at all yields 404 rather than empty lists
#[tokio::test]
async fn listing_without_favorites_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_star_tables().build().await?;
    let user = test.user().insert_user().await?;

    let result = get_user_favorites(State(test.to_app_state()), Path(user.id)).await;

    assert!(result.is_err());
    let response = error_response(result);
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await?;
    assert_eq!(body, json!({ "error": "User has no favorites" }));

    Ok(())
}
