//! Tests for character controller endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holonet::{
    model::character::{CreateCharacterDto, UpdateCharacterDto},
    server::controller::character::{
        create_character, delete_character, get_character, get_characters, update_character,
    },
};
use holonet_test_utils::prelude::*;
use serde_json::json;

use crate::util::{error_response, response_json};

/// Creation yields 201 and a projection without the species field
#[tokio::test]
async fn create_character_projection_excludes_species() -> Result<(), TestError> {
    let test = TestBuilder::new().with_star_tables().build().await?;

    let payload = CreateCharacterDto {
        name: Some("Han Solo".to_string()),
        gender: Some("male".to_string()),
        species: Some("human".to_string()),
    };
    let result = create_character(State(test.to_app_state()), Json(payload)).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await?;
    assert_eq!(body, json!({ "id": 1, "name": "Han Solo", "gender": "male" }));

    Ok(())
}

/// A payload with missing fields is rejected with 404
#[tokio::test]
async fn create_character_with_missing_fields_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_star_tables().build().await?;

    let payload = CreateCharacterDto {
        name: Some("Han Solo".to_string()),
        gender: None,
        species: None,
    };
    let result = create_character(State(test.to_app_state()), Json(payload)).await;

    assert!(result.is_err());
    assert_eq!(error_response(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Listing returns every character
#[tokio::test]
async fn get_characters_lists_all_rows() -> Result<(), TestError> {
    let test = TestBuilder::new().with_star_tables().build().await?;
    test.catalog().insert_character_named("Leia Organa").await?;
    test.catalog().insert_character_named("Chewbacca").await?;

    let result = get_characters(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let body = response_json(result.unwrap().into_response()).await?;
    assert_eq!(body.as_array().unwrap().len(), 2);

    Ok(())
}

/// An empty update returns the character unchanged
#[tokio::test]
async fn update_character_with_empty_payload_is_a_no_op() -> Result<(), TestError> {
    let test = TestBuilder::new().with_star_tables().build().await?;
    let character = test.catalog().insert_character().await?;

    let result = update_character(
        State(test.to_app_state()),
        Path(character.id),
        Json(UpdateCharacterDto::default()),
    )
    .await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await?;
    assert_eq!(
        body,
        json!({ "id": character.id, "name": character.name, "gender": character.gender })
    );

    Ok(())
}

/// Deleting then fetching yields 404
#[tokio::test]
async fn delete_character_then_get_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_star_tables().build().await?;
    let character = test.catalog().insert_character().await?;

    let result = delete_character(State(test.to_app_state()), Path(character.id)).await;
    assert!(result.is_ok());

    let result = get_character(State(test.to_app_state()), Path(character.id)).await;
    assert_eq!(error_response(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}
