//! Request deadline handling.

use axum::BoxError;
use tower::timeout::error::Elapsed;

use crate::error::ApiError;

/// Turns errors from the timeout layer into JSON error responses.
pub async fn handle_timeout_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        tracing::warn!("Request exceeded its deadline");
        ApiError::RequestTimeout
    } else {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        error_handling::HandleErrorLayer,
        http::{header, Request, StatusCode},
        routing::get,
        Router,
    };
    use std::time::Duration;
    use tower::{ServiceBuilder, ServiceExt};

    fn app_with_deadline(deadline: Duration) -> Router {
        Router::new()
            .route("/fast", get(|| async { "ok" }))
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "late"
                }),
            )
            .layer(
                ServiceBuilder::new()
                    .layer(HandleErrorLayer::new(handle_timeout_error))
                    .timeout(deadline),
            )
    }

    #[tokio::test]
    async fn test_slow_request_gets_json_timeout() {
        let response = app_with_deadline(Duration::from_millis(50))
            .oneshot(Request::builder().uri("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"error": "request timed out"}));
    }

    #[tokio::test]
    async fn test_fast_request_unaffected() {
        let response = app_with_deadline(Duration::from_secs(5))
            .oneshot(Request::builder().uri("/fast").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_other_errors_are_internal() {
        let err: BoxError = "broken pipe".into();
        match handle_timeout_error(err).await {
            ApiError::Internal(msg) => assert_eq!(msg, "broken pipe"),
            other => panic!("Expected Internal error, got {other:?}"),
        }
    }
}
