//! JSON body extractor with content type enforcement and validation.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::ApiError;

/// Deserialized and validated JSON request body.
///
/// Rejects with 415 unless the request declares `application/json`, with 400
/// if the body does not decode into `T`, and with 400 if `T` fails validation.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

/// Whether the headers declare `application/json`, parameters such as
/// `charset` allowed.
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json_content_type(req.headers()) {
            return Err(ApiError::UnsupportedMediaType(
                "content-type must be application/json".to_string(),
            ));
        }

        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "Rejected request body");
                ApiError::BadRequest("invalid request body".to_string())
            })?;

        value.validate()?;
        Ok(Self(value))
    }
}
