//! Shared application router builder.
//!
//! Provides [`build_app_router`] so both the production binary (via
//! [`startup`](crate::startup)) and the integration tests use the exact
//! same middleware stack.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::request::Parts;
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::middleware;
use crate::policy::OriginPolicy;
use crate::routes;
use crate::state::AppState;

/// Build the full application [`Router`] with all middleware layers.
///
/// The middleware stack is applied bottom-up:
///
/// 1. Origin guard (reject denied origins before route dispatch)
/// 2. Panic recovery (catch panics, return 500)
/// 3. Request timeout
/// 4. Propagate request ID to response
/// 5. Structured request/response tracing
/// 6. Set request ID on incoming requests
/// 7. CORS
pub fn build_app_router(state: AppState) -> Router {
    let cors = build_cors_layer(state.policy.clone());
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        // Health check at root level (not under /api).
        .merge(routes::health::router())
        // API route groups.
        .nest("/api", routes::api_routes())
        // -- Middleware stack (applied bottom-up) --
        // Origin guard: innermost so denial precedes route dispatch.
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::origin_guard,
        ))
        // Panic recovery: catch panics and return 500.
        .layer(CatchPanicLayer::new())
        // Request timeout.
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(state.config.request_timeout_secs),
        ))
        // Propagate request ID to response.
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        // Structured request/response tracing.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Set request ID on incoming requests.
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        // CORS.
        .layer(cors)
        // Shared state.
        .with_state(state)
}

/// Build the CORS middleware layer around the origin policy.
///
/// The allow-list is dynamic (environment plus configuration), so origins
/// are matched with [`AllowOrigin::predicate`] instead of a static list.
/// Allowed origins are mirrored back with credentials enabled; denied
/// origins never appear in `Access-Control-Allow-Origin`.
pub fn build_cors_layer(policy: OriginPolicy) -> CorsLayer {
    let origin = AllowOrigin::predicate(move |origin: &HeaderValue, _parts: &Parts| {
        origin
            .to_str()
            .map(|o| policy.evaluate(Some(o)).is_allow())
            .unwrap_or(false)
    });

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
