//! Tests for planet controller endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holonet::{
    model::planet::CreatePlanetDto,
    server::controller::planet::{create_planet, get_planet, get_planets},
};
use holonet_test_utils::prelude::*;
use serde_json::json;

use crate::util::{error_response, response_json};

/// Creation yields 201 and a projection without the population field
#[tokio::test]
async fn create_planet_projection_excludes_population() -> Result<(), TestError> {
    let test = TestBuilder::new().with_star_tables().build().await?;

    let payload = CreatePlanetDto {
        name: Some("Tatooine".to_string()),
        population: Some(200_000),
        terrain: Some("desert".to_string()),
    };
    let result = create_planet(State(test.to_app_state()), Json(payload)).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await?;
    assert_eq!(
        body,
        json!({ "id": 1, "name": "Tatooine", "terrain": "desert" })
    );

    Ok(())
}

/// A payload without the population key is rejected with 404
#[tokio::test]
async fn create_planet_without_population_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_star_tables().build().await?;

    let payload = CreatePlanetDto {
        name: Some("Tatooine".to_string()),
        population: None,
        terrain: Some("desert".to_string()),
    };
    let result = create_planet(State(test.to_app_state()), Json(payload)).await;

    assert!(result.is_err());
    assert_eq!(error_response(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Listing returns every planet
#[tokio::test]
async fn get_planets_lists_all_rows() -> Result<(), TestError> {
    let test = TestBuilder::new().with_star_tables().build().await?;
    test.catalog().insert_planet_named("Tatooine").await?;
    test.catalog().insert_planet_named("Hoth").await?;

    let result = get_planets(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let body = response_json(result.unwrap().into_response()).await?;
    assert_eq!(body.as_array().unwrap().len(), 2);

    Ok(())
}

/// Fetching an id that does not exist yields 404
#[tokio::test]
async fn get_planet_unknown_id_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_star_tables().build().await?;

    let result = get_planet(State(test.to_app_state()), Path(1)).await;

    assert!(result.is_err());
    let response = error_response(result);
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await?;
    assert_eq!(body, json!({ "error": "Planet not found" }));

    Ok(())
}
