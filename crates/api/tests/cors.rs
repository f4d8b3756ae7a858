//! End-to-end tests for the origin policy: guard middleware rejection,
//! credentialed CORS headers, and the preflight path.
//!
//! A request that clears the policy reaches its mounted route group and
//! observes that group's 501; a denied request observes the guard's 403.
//! That status difference is how these tests distinguish "rejected before
//! dispatch" from "dispatched".

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get, get_with_origin};
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: requests without an Origin header bypass the policy entirely
// ---------------------------------------------------------------------------

#[tokio::test]
async fn request_without_origin_reaches_the_route_group() {
    let app = common::build_test_app(common::test_config()).await;
    let response = get(app, "/api/users").await;

    // 501 (the group's fallback), not 403 (the guard).
    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
}

#[tokio::test]
async fn request_without_origin_is_allowed_even_in_production() {
    let app = common::build_test_app(common::production_config(Some(
        "https://app.example.com",
    )))
    .await;
    let response = get(app, "/api/bills").await;

    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
}

// ---------------------------------------------------------------------------
// Test: development allows exactly the Vite dev origins
// ---------------------------------------------------------------------------

#[tokio::test]
async fn development_allows_vite_origin_with_credentialed_headers() {
    let app = common::build_test_app(common::test_config()).await;
    let response = get_with_origin(app, "/api/users", "http://localhost:5174").await;

    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);

    let headers = response.headers();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .expect("allowed origin must be mirrored")
            .to_str()
            .unwrap(),
        "http://localhost:5174"
    );
    assert_eq!(
        headers
            .get("access-control-allow-credentials")
            .expect("credentials must be allowed")
            .to_str()
            .unwrap(),
        "true"
    );
}

#[tokio::test]
async fn development_denies_unknown_origin_before_dispatch() {
    let app = common::build_test_app(common::test_config()).await;
    let response = get_with_origin(app, "/api/users", "http://evil.com").await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Denied origins must not be mirrored into CORS headers.
    assert!(response.headers().get("access-control-allow-origin").is_none());

    let json = body_json(response).await;
    assert_eq!(json["code"], "CORS_REJECTED");
    let message = json["error"].as_str().unwrap();
    assert!(
        message.contains("http://evil.com"),
        "rejection must name the origin, got: {message}"
    );
}

// ---------------------------------------------------------------------------
// Test: production allows exactly FRONTEND_URL
// ---------------------------------------------------------------------------

#[tokio::test]
async fn production_allows_the_configured_frontend() {
    let app = common::build_test_app(common::production_config(Some(
        "https://app.example.com",
    )))
    .await;
    let response = get_with_origin(app, "/api/clients", "https://app.example.com").await;

    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap()
            .to_str()
            .unwrap(),
        "https://app.example.com"
    );
}

#[tokio::test]
async fn production_denies_other_origins() {
    let app = common::build_test_app(common::production_config(Some(
        "https://app.example.com",
    )))
    .await;
    let response = get_with_origin(app, "/api/clients", "https://other.com").await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(response).await;
    assert_eq!(json["code"], "CORS_REJECTED");
}

// ---------------------------------------------------------------------------
// Test: production with no configured origin falls open
// ---------------------------------------------------------------------------

#[tokio::test]
async fn production_without_frontend_url_allows_any_origin() {
    let app = common::build_test_app(common::production_config(None)).await;
    let response = get_with_origin(app, "/api/contact", "https://anything.com").await;

    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap()
            .to_str()
            .unwrap(),
        "https://anything.com"
    );
}

// ---------------------------------------------------------------------------
// Test: CORS preflight OPTIONS requests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn preflight_from_allowed_origin_mirrors_it() {
    let app = common::build_test_app(common::test_config()).await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/users")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .expect("Missing Access-Control-Allow-Origin header")
            .to_str()
            .unwrap(),
        "http://localhost:5173"
    );

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("POST"),
        "Allow-Methods should contain POST, got: {allow_methods}"
    );
}

#[tokio::test]
async fn preflight_from_denied_origin_gets_no_allow_origin_header() {
    let app = common::build_test_app(common::test_config()).await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/users")
        .header("Origin", "http://evil.com")
        .header("Access-Control-Request-Method", "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    // The CORS layer answers the preflight itself; denial shows up as the
    // absent allow-origin header, which is what browsers enforce on.
    assert!(response.headers().get("access-control-allow-origin").is_none());
}
