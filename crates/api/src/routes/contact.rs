//! Mount point for the contact route group (`/api/contact`).

use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

async fn not_wired() -> AppError {
    AppError::NotImplemented("contact")
}

/// Contact form handlers live outside this bootstrap; the mounted group
/// answers 501 until they are wired in.
pub fn router() -> Router<AppState> {
    Router::new().fallback(not_wired)
}
