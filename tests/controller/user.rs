//! Tests for user controller endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holonet::{
    model::user::{CreateUserDto, UpdateUserDto},
    server::controller::user::{create_user, delete_user, get_user, get_users, update_user},
};
use holonet_test_utils::prelude::*;
use serde_json::json;

use crate::util::{error_response, response_json};

fn payload() -> CreateUserDto {
    CreateUserDto {
        username: Some("ana".to_string()),
        email: Some("a@a.com".to_string()),
        password: Some("x".to_string()),
        firstname: Some("Ana".to_string()),
        lastname: Some("Lee".to_string()),
    }
}

/// A complete payload yields 201 and the {id, email} projection
#[tokio::test]
async fn create_user_returns_created_projection() -> Result<(), TestError> {
    let test = TestBuilder::new().with_star_tables().build().await?;

    let result = create_user(State(test.to_app_state()), Json(payload())).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await?;
    assert_eq!(body, json!({ "id": 1, "email": "a@a.com" }));

    Ok(())
}

/// A payload with missing fields is rejected with 404
#[tokio::test]
async fn create_user_with_missing_fields_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_star_tables().build().await?;

    let incomplete = CreateUserDto {
        password: None,
        ..payload()
    };
    let result = create_user(State(test.to_app_state()), Json(incomplete)).await;

    assert!(result.is_err());
    let response = error_response(result);
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Listing returns every user through the projection
#[tokio::test]
async fn get_users_lists_all_rows() -> Result<(), TestError> {
    let test = TestBuilder::new().with_star_tables().build().await?;
    test.user().insert_user_named("ana").await?;
    test.user().insert_user_named("ben").await?;

    let result = get_users(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await?;
    assert_eq!(body.as_array().unwrap().len(), 2);

    Ok(())
}

/// Fetching an id that does not exist yields 404
#[tokio::test]
async fn get_user_unknown_id_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_star_tables().build().await?;

    let result = get_user(State(test.to_app_state()), Path(1)).await;

    assert!(result.is_err());
    let response = error_response(result);
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response_json(response).await?;
    assert_eq!(body, json!({ "error": "User not found" }));

    Ok(())
}

/// A partial update touches only the supplied field
#[tokio::test]
async fn update_user_changes_supplied_field_only() -> Result<(), TestError> {
    let test = TestBuilder::new().with_star_tables().build().await?;
    let user = test.user().insert_user().await?;

    let update = UpdateUserDto {
        email: Some("leia@example.com".to_string()),
        ..Default::default()
    };
    let result = update_user(State(test.to_app_state()), Path(user.id), Json(update)).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await?;
    assert_eq!(body, json!({ "id": user.id, "email": "leia@example.com" }));

    Ok(())
}

/// Deleting then fetching yields 404
#[tokio::test]
async fn delete_user_then_get_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_star_tables().build().await?;
    let user = test.user().insert_user().await?;

    let result = delete_user(State(test.to_app_state()), Path(user.id)).await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let result = get_user(State(test.to_app_state()), Path(user.id)).await;
    assert_eq!(error_response(result).status(), StatusCode::NOT_FOUND);

    Ok(())
}
