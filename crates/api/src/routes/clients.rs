//! Mount point for the client registry route group (`/api/clients`).

use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

async fn not_wired() -> AppError {
    AppError::NotImplemented("clients")
}

/// Client registry handlers live outside this bootstrap; the mounted
/// group answers 501 until they are wired in.
pub fn router() -> Router<AppState> {
    Router::new().fallback(not_wired)
}
