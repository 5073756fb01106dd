use crate::{AppState, handlers};
use axum::{Router, routing::post};

/// Refresh Router Module
///
/// Holds the single session-rotation endpoint. It gets a router of its own
/// because it runs under its own guard policy: authenticated like any
/// protected route, but requiring the **refresh** token kind. An access token
/// (sent on every request, so far more widely exposed) presented here fails
/// exactly the way a refresh token presented on a normal route does.
pub fn refresh_routes() -> Router<AppState> {
    Router::new()
        // POST /auth/refresh
        // Exchanges a valid, still-current refresh token for a brand-new
        // pair and atomically replaces the stored token with the new one.
        .route("/auth/refresh", post(handlers::refresh))
}
