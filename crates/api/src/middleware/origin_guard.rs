//! Request-rejecting enforcement of the origin policy.
//!
//! The CORS layer only shapes response headers; browsers enforce the rest.
//! This middleware makes denial authoritative on the server side as well:
//! a denied origin receives `403 CORS_REJECTED` and the request never
//! reaches a route handler.

use axum::extract::{Request, State};
use axum::http::header::ORIGIN;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;
use crate::policy::Decision;
use crate::state::AppState;

/// Evaluate the request's `Origin` header against the configured policy,
/// rejecting the request before dispatch when the policy denies it.
///
/// Installed via `axum::middleware::from_fn_with_state` as the innermost
/// layer, directly around the route tree.
pub async fn origin_guard(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request.headers().get(ORIGIN).and_then(|v| v.to_str().ok());

    match state.policy.evaluate(origin) {
        Decision::Allow => next.run(request).await,
        Decision::Deny { reason } => AppError::OriginRejected(reason).into_response(),
    }
}
