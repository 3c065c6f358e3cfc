use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response for operations without an entity payload, such as deletions
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    /// Human-readable outcome of the operation
    pub message: String,
}
