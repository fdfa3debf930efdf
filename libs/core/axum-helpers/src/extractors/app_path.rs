//! Path extractor whose rejections use the crate's error body.

use crate::errors::AppError;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

/// Drop-in replacement for [`axum::extract::Path`].
///
/// A segment that is not valid UTF-8 or does not deserialize into `T` is
/// rejected with axum's status, rendered as `{"error": "..."}`.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::AppPath;
///
/// async fn get_item(AppPath(name): AppPath<String>) -> impl IntoResponse {
///     // ...
/// }
/// ```
pub struct AppPath<T>(pub T);

impl<T, S> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(AppPath(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn echo(AppPath(name): AppPath<String>) -> String {
        name
    }

    fn app() -> Router {
        Router::new().route("/{name}", get(echo))
    }

    #[tokio::test]
    async fn test_segment_is_percent_decoded() {
        let request = Request::get("/froot%20loops").body(Body::empty()).unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"froot loops");
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_json_error_body() {
        let request = Request::get("/%FF").body(Body::empty()).unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"].as_str().unwrap().contains("UTF-8"));
    }
}
