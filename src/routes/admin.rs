use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{delete, get},
};

/// Admin Router Module
///
/// Defines the routes exclusively accessible to users with the 'admin' role.
/// These endpoints provide moderation, oversight, and statistical access.
///
/// Access Control:
/// The whole router is nested under `/admin` behind the `AdminOnly` guard
/// layer, which authenticates the caller and rejects non-admin roles with
/// 403 before any handler runs. Handlers here therefore carry no role check
/// of their own — admin force-delete skips the ownership check entirely.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        // GET /admin/users?page=...&limit=...
        // Paged listing of every registered account (public-safe fields only).
        .route("/users", get(handlers::get_admin_users))
        // GET /admin/stats
        // Core dashboard counters: total users, posts, comments, categories.
        .route("/stats", get(handlers::get_admin_stats))
        // DELETE /admin/posts/{id}
        // Force-deletes any post regardless of ownership. The moderation
        // counterpart of the owner-gated DELETE /posts/{id}.
        .route("/posts/{id}", delete(handlers::delete_post_admin))
}
