pub mod bills;
pub mod clients;
pub mod contact;
pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /users     user account routes
/// /contact   contact form routes
/// /clients   client registry routes
/// /bills     billing routes
/// ```
///
/// The four groups have disjoint prefixes; their order here is
/// immaterial.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/contact", contact::router())
        .nest("/clients", clients::router())
        .nest("/bills", bills::router())
}
