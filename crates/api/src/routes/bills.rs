//! Mount point for the billing route group (`/api/bills`).

use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

async fn not_wired() -> AppError {
    AppError::NotImplemented("bills")
}

/// Billing handlers live outside this bootstrap; the mounted group
/// answers 501 until they are wired in.
pub fn router() -> Router<AppState> {
    Router::new().fallback(not_wired)
}
