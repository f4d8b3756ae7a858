use std::sync::Arc;

use axum::body::Body;
use axum::http::header::ORIGIN;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use jje_api::config::{AppConfig, RuntimeEnv};
use jje_api::policy::OriginPolicy;
use jje_api::router::build_app_router;
use jje_api::state::AppState;
use jje_db::Mongo;

/// Build a development-mode test `AppConfig` with safe defaults.
///
/// The connection string points at a port nothing listens on; tests never
/// perform the connection attempt, and `Mongo::open` does no I/O.
pub fn test_config() -> AppConfig {
    AppConfig {
        env: RuntimeEnv::Development,
        frontend_url: None,
        mongodb_uri: "mongodb://localhost:27017/jje_test".to_string(),
        port: 0,
        request_timeout_secs: 30,
    }
}

/// Build a production-mode test `AppConfig` with the given frontend URL.
pub fn production_config(frontend_url: Option<&str>) -> AppConfig {
    AppConfig {
        env: RuntimeEnv::Production,
        frontend_url: frontend_url.map(String::from),
        ..test_config()
    }
}

/// Build the full application router with all middleware layers.
///
/// This calls the same [`build_app_router`] as the production startup
/// sequence, so integration tests exercise the exact middleware stack
/// (origin guard, CORS, request ID, timeout, tracing, panic recovery)
/// that production uses.
pub async fn build_test_app(config: AppConfig) -> Router {
    let mongo = Mongo::open(&config.mongodb_uri)
        .await
        .expect("test connection string must parse");

    let policy = OriginPolicy::from_config(&config);
    let state = AppState {
        db: mongo,
        config: Arc::new(config),
        policy,
    };

    build_app_router(state)
}

/// Issue a GET request with no `Origin` header.
pub async fn get(app: Router, path: &str) -> Response {
    let request = Request::builder()
        .uri(path)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Issue a GET request carrying the given `Origin` header.
pub async fn get_with_origin(app: Router, path: &str, origin: &str) -> Response {
    let request = Request::builder()
        .uri(path)
        .header(ORIGIN, origin)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
