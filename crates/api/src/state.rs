use std::sync::Arc;

use crate::config::AppConfig;
use crate::policy::OriginPolicy;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Handle to the persistent MongoDB connection. The route groups
    /// query through this once their handlers are wired in.
    pub db: jje_db::Mongo,
    /// Server configuration.
    pub config: Arc<AppConfig>,
    /// Origin policy consulted by the guard middleware and the CORS layer
    /// on every request.
    pub policy: OriginPolicy,
}
