use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Public Router Module
///
/// Defines endpoints accessible to any client, anonymous or logged-in. These
/// cover the read-only board surface (posts, comments, categories) and the
/// two gateway functions that create a session in the first place.
///
/// The guard evaluates these routes under the `Public` policy, which returns
/// before the Authorization header is even looked at — an expired or garbage
/// token in the header cannot break a public read.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // A simple, unauthenticated endpoint used for monitoring and load balancer checks.
        // Returns "ok" immediately to verify the service is running and responsive.
        .route("/health", get(|| async { "ok" }))
        // POST /auth/signup
        // Registers a new account (email + double-entered password) and returns
        // a full token pair, so the client is signed in straight away.
        .route("/auth/signup", post(handlers::signup))
        // POST /auth/signin
        // Exchanges credentials for a token pair. Failures are a uniform 401.
        .route("/auth/signin", post(handlers::signin))
        // GET /posts?category=...
        // Lists posts newest-first with author/category names and comment counts.
        .route("/posts", get(handlers::get_posts))
        // GET /posts/pagination?page=...&limit=...&category=...
        // The paged variant of the listing, with the unpaged total alongside.
        .route("/posts/pagination", get(handlers::get_posts_page))
        // GET /posts/{id}
        // Retrieves the detailed view of a single post.
        .route("/posts/{id}", get(handlers::get_post_details))
        // GET /posts/{id}/comments
        // Lists the top-level comments of a post with reply and like counts.
        .route("/posts/{id}/comments", get(handlers::get_comments))
        // GET /posts/{id}/comments/pagination?page=...&limit=...
        // Paged top-level comments, newest first.
        .route(
            "/posts/{id}/comments/pagination",
            get(handlers::get_comments_page),
        )
        // GET /posts/{id}/comments/{parent_id}/replies
        // The replies under one comment, oldest first.
        .route(
            "/posts/{id}/comments/{parent_id}/replies",
            get(handlers::get_replies),
        )
        // GET /categories
        // The full category list for the navigation bar.
        .route("/categories", get(handlers::get_categories))
        // GET /categories/{id}
        // One category by ID.
        .route("/categories/{id}", get(handlers::get_category))
}
