//! Mount point for the user route group (`/api/users`).

use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

async fn not_wired() -> AppError {
    AppError::NotImplemented("users")
}

/// User account handlers live outside this bootstrap. Every path in the
/// group answers 501 until they are wired in, which keeps the mount
/// itself observable.
pub fn router() -> Router<AppState> {
    Router::new().fallback(not_wired)
}
