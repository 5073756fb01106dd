use axum::{Router, extract::FromRef, http::HeaderName, middleware};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Core application services and components.
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod password;
pub mod repository;
pub mod token;

// Module for routing segregation (Public, Authenticated, Refresh, Admin).
pub mod routes;
use routes::{admin, authenticated, public, refresh};

// --- Public Re-exports ---

// Makes core state types easily accessible to the main application entry point (main.rs).
pub use config::AppConfig;
pub use error::ApiError;
pub use repository::{PostgresRepository, RepositoryState};
pub use token::TokenCodec;

/// ApiDoc
///
/// This struct auto-generates the OpenAPI documentation (Swagger JSON) for the application.
/// It aggregates all API paths and data schemas that have been decorated with
/// the `#[utoipa::path]` and `#[derive(utoipa::ToSchema)]` macros.
/// The resulting JSON is served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    // List all public handler functions here for documentation generation.
    paths(
        handlers::signup, handlers::signin, handlers::refresh,
        handlers::get_me, handlers::get_user,
        handlers::get_posts, handlers::get_posts_page, handlers::get_post_details,
        handlers::create_post, handlers::update_post, handlers::delete_post,
        handlers::get_comments, handlers::get_comments_page, handlers::get_replies,
        handlers::add_comment, handlers::delete_comment, handlers::delete_post_comments,
        handlers::like_comment, handlers::unlike_comment,
        handlers::create_category, handlers::get_categories, handlers::get_category,
        handlers::rename_category, handlers::delete_category,
        handlers::get_admin_users, handlers::get_admin_stats, handlers::delete_post_admin
    ),
    // List all models (schemas) used in the request/response bodies.
    components(
        schemas(
            models::Role, models::Post, models::PostSummary, models::PostPage,
            models::CommentResponse, models::CommentPage, models::Category,
            models::SignupRequest, models::SigninRequest,
            models::CreatePostRequest, models::UpdatePostRequest,
            models::CreateCommentRequest, models::CreateCategoryRequest,
            models::UpdateCategoryRequest,
            models::TokenPairResponse, models::UserResponse, models::UserProfile,
            models::BoardStats, models::DeletedCount,
            error::ErrorBody,
        )
    ),
    tags(
        (name = "vlog-board", description = "Blog/Board Backend API")
    )
)]
struct ApiDoc;

/// AppState
///
/// Implements the **Unified State Pattern**. This is the single, thread-safe, and immutable
/// container holding all essential application services and configuration.
/// The application state is shared across all incoming requests.
#[derive(Clone)]
pub struct AppState {
    /// Repository Layer: Abstracts database access via the PgPool connection.
    pub repo: RepositoryState,
    /// Token Codec: Issues and verifies the signed access/refresh tokens.
    pub codec: TokenCodec,
    /// Configuration: The loaded, immutable environment configuration.
    pub config: AppConfig,
}

// --- Axum FromRef Extractor Implementations ---

// These implementations allow handlers and middleware to selectively pull
// components from the shared AppState.

impl FromRef<AppState> for RepositoryState {
    fn from_ref(app_state: &AppState) -> RepositoryState {
        app_state.repo.clone()
    }
}

impl FromRef<AppState> for TokenCodec {
    fn from_ref(app_state: &AppState) -> TokenCodec {
        app_state.codec.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// create_router
///
/// Assembles the application's entire routing structure, applies global and scoped middleware,
/// and registers the application state.
///
/// Access control is declarative: each route module is merged with exactly one
/// guard layer, so the policy a request runs under is visible right here
/// rather than scattered across handlers. Public routes carry no guard at
/// all — the guard's `Public` policy never touches the Authorization header.
pub fn create_router(state: AppState) -> Router {
    // 1. CORS Configuration
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    // Header name constant for Request Correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    // 2. Base Router Assembly
    let base_router = Router::new()
        // Documentation: Serve the auto-generated Swagger UI.
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public Routes: no guard layer; anonymous reads and the signup/signin gateway.
        .merge(public::public_routes())
        // Authenticated Routes: behind the access-token guard. The layer
        // verifies the token, requires access kind, resolves the subject, and
        // attaches the `AuthUser` extension the handlers extract.
        .merge(
            authenticated::authenticated_routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth::require_access_token,
            )),
        )
        // Refresh Route: same authentication, but the required token kind
        // flips to refresh.
        .merge(
            refresh::refresh_routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth::require_refresh_token,
            )),
        )
        // Admin Routes: nested under '/admin', behind the admin guard, which
        // adds the role check on top of the access-token requirements.
        .nest(
            "/admin",
            admin::admin_routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth::require_admin,
            )),
        )
        // Apply the Unified State to all routes.
        .with_state(state);

    // 3. Observability and Correlation Layers (Applied outermost/first)
    base_router
        .layer(
            ServiceBuilder::new()
                // 3a. Request ID Generation: a unique UUID for every incoming request.
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                // 3b. Request Tracing: wraps the request/response lifecycle in a
                // tracing span carrying the generated request ID.
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                // 3c. Request ID Propagation: returns the x-request-id header
                // to the client.
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        // 4. CORS Layer (Applied last, allowing all traffic in/out after processing)
        .layer(cors)
}

/// trace_span_logger
///
/// Helper function used by `TraceLayer` to customize the tracing span creation.
/// It extracts the `x-request-id` header (if present) and includes it in the
/// structured logging metadata alongside the HTTP method and URI, so every log
/// line for a single request is correlated by a unique ID — including the
/// guard's denial warnings.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
