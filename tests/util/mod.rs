//! Shared helpers for integration tests.

use axum::response::{IntoResponse, Response};
use holonet::server::error::Error;
use holonet_test_utils::TestError;

/// Read a handler response body and deserialize it as JSON for assertions.
pub async fn response_json(response: Response) -> Result<serde_json::Value, TestError> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");

    Ok(serde_json::from_slice(&bytes)?)
}

/// Unwrap the error branch of a handler result as an HTTP response.
///
/// Panics when the handler unexpectedly succeeded.
pub fn error_response<T: IntoResponse>(result: Result<T, Error>) -> Response {
    match result {
        Ok(_) => panic!("expected the handler to fail"),
        Err(err) => err.into_response(),
    }
}
