//! API routes module

pub mod items;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/items", items::router(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use crate::openapi::ApiDoc;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum_helpers::health_router;
    use core_config::{app_info, server::ServerConfig};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        let state = AppState::new(Config {
            app: app_info!(),
            server: ServerConfig::default(),
            environment: Environment::Development,
        });
        axum_helpers::create_router::<ApiDoc>(routes(&state)).merge(health_router(state.config.app))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_catalog_starts_empty() {
        let (status, body) = send(&app(), get("/items")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"items": []}));
    }

    #[tokio::test]
    async fn test_items_share_one_store() {
        let app = app();
        let create = Request::builder()
            .method("POST")
            .uri("/items")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name": "popsicle", "price": "1.45"}"#))
            .unwrap();

        let (status, _) = send(&app, create).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(&app, get("/items/popsicle")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"item": {"name": "popsicle", "price": 1.45}}));
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, body) = send(&app(), get("/nope")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Not Found"}));
    }

    #[tokio::test]
    async fn test_health_reports_crate_name() {
        let (status, body) = send(&app(), get("/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["name"], "catalog_api");
    }

    #[tokio::test]
    async fn test_openapi_lists_item_paths() {
        let (status, body) = send(&app(), get("/api-docs/openapi.json")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"].get("/items").is_some());
        assert!(body["paths"].get("/items/{name}").is_some());
    }
}
