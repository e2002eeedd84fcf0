//! Responses for requests that match no handler.

use crate::error::ApiError;

/// Known path, wrong HTTP method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Unknown path.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("not found".to_string())
}
