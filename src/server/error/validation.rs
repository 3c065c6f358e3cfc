use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Payload validation failures raised while creating an entity.
///
/// Validation is field presence only; values that are present are taken
/// as-is with no range or format checks.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{entity} payload is missing required fields: {}", .fields.join(", "))]
    MissingFields {
        entity: &'static str,
        fields: Vec<&'static str>,
    },
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        // 404 rather than 400: the status for missing payload data is part
        // of the API's compatibility surface.
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
