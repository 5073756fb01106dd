use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// Authenticated Router Module
///
/// Defines the routes accessible to any user who has passed the access-token
/// guard. This module implements all core application features for a standard
/// user: publishing posts, commenting, liking, and maintaining categories.
///
/// Access Control Strategy:
/// The guard layer above this module has already verified the token, required
/// access kind, and resolved the subject against the users table, so every
/// handler here receives a validated `AuthUser` out of the request extensions.
/// Handlers only add the per-resource ownership check (e.g. in `update_post`
/// and `delete_comment`); they never re-verify the token.
pub fn authenticated_routes() -> Router<AppState> {
    Router::<AppState>::new()
        // GET /me
        // Retrieves the currently authenticated user's own profile.
        .route("/me", get(handlers::get_me))
        // GET /users/{id}
        // The public-safe view of any user record (id, email, joined date).
        .route("/users/{id}", get(handlers::get_user))
        // --- Posts ---
        // POST /posts
        // Submits a new post. The author is the resolved identity, never payload data.
        .route("/posts", post(handlers::create_post))
        // PUT/DELETE /posts/{id}
        // Lets a user modify or remove their own post; admins pass the same
        // ownership check on any post. Existence is decided before ownership.
        .route(
            "/posts/{id}",
            put(handlers::update_post).delete(handlers::delete_post),
        )
        // --- Commenting System ---
        // POST /posts/{id}/comments
        // Posts a comment, or a reply when `parentId` is given.
        // DELETE /posts/{id}/comments
        // Wipes the post's whole comment section; gated on the post's owner.
        .route(
            "/posts/{id}/comments",
            post(handlers::add_comment).delete(handlers::delete_post_comments),
        )
        // DELETE /comments/{id}
        // Deletes one comment (and its replies). Ownership check in the handler.
        .route("/comments/{id}", delete(handlers::delete_comment))
        // POST/DELETE /comments/{id}/like
        // Records or removes a like. The composite primary key on
        // `comment_likes` makes double-liking impossible; duplicates are 409.
        .route(
            "/comments/{id}/like",
            post(handlers::like_comment).delete(handlers::unlike_comment),
        )
        // --- Categories ---
        // POST /categories
        // Creates a category. Ownerless, so any authenticated user may.
        .route("/categories", post(handlers::create_category))
        // PATCH/DELETE /categories/{id}
        // Renames or deletes a category. Deleting one that posts still
        // reference is refused with a conflict.
        .route(
            "/categories/{id}",
            axum::routing::patch(handlers::rename_category).delete(handlers::delete_category),
        )
}
