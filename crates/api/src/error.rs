use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for the HTTP surface.
///
/// Implements [`IntoResponse`] to produce consistent JSON error responses
/// of the shape `{"error": <message>, "code": <CODE>}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A cross-origin request the origin policy denied. The message is
    /// the policy's reason string, which names the rejected origin.
    #[error("{0}")]
    OriginRejected(String),

    /// A mounted route group whose handlers are not wired in this build.
    #[error("No handlers are wired for the {0} route group in this build")]
    NotImplemented(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::OriginRejected(_) => (StatusCode::FORBIDDEN, "CORS_REJECTED"),
            AppError::NotImplemented(_) => (StatusCode::NOT_IMPLEMENTED, "NOT_IMPLEMENTED"),
        };

        let body = json!({
            "error": self.to_string(),
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
