use crate::{
    AppState,
    auth::{self, AuthUser},
    error::{self, ApiError},
    models::{
        BoardStats, Category, CommentPage, CommentResponse, CreateCategoryRequest,
        CreateCommentRequest, CreatePostRequest, DeletedCount, Post, PostPage, PostSummary,
        SigninRequest, SignupRequest, TokenPairResponse, UpdateCategoryRequest, UpdatePostRequest,
        UserProfile, UserResponse,
    },
    password,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
};
use serde::Deserialize;
use uuid::Uuid;

// --- Filter Structs ---

/// PostFilter
///
/// Accepted query parameters for the public post listing endpoint (GET /posts).
#[derive(Deserialize, utoipa::IntoParams)]
pub struct PostFilter {
    /// Optional filter narrowing the listing to one category.
    pub category: Option<Uuid>,
}

/// PostPageFilter
///
/// Accepted query parameters for the paged post listing
/// (GET /posts/pagination).
#[derive(Deserialize, utoipa::IntoParams)]
pub struct PostPageFilter {
    /// 1-based page number; defaults to 1.
    pub page: Option<i64>,
    /// Page size; defaults to 10, capped at 100.
    pub limit: Option<i64>,
    /// Optional filter narrowing the listing to one category.
    pub category: Option<Uuid>,
}

/// PageFilter
///
/// Plain pagination parameters, shared by the comment and user listings.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct PageFilter {
    /// 1-based page number; defaults to 1.
    pub page: Option<i64>,
    /// Page size; defaults to 10, capped at 100.
    pub limit: Option<i64>,
}

/// page_bounds
///
/// Normalizes raw pagination input: missing values get the defaults the
/// frontend assumes, out-of-range values are clamped instead of erroring.
fn page_bounds(page: Option<i64>, limit: Option<i64>) -> (i64, i64) {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(10).clamp(1, 100);
    (page, limit)
}

// --- Auth Handlers ---

/// issue_session
///
/// Mints a fresh access/refresh pair for the subject and persists the refresh
/// token in one atomic upsert, superseding whatever token was stored before.
/// Shared by signup, signin, and refresh so the three paths cannot drift.
async fn issue_session(state: &AppState, user_id: Uuid) -> Result<TokenPairResponse, ApiError> {
    let pair = state
        .codec
        .issue_pair(user_id)
        .map_err(|e| ApiError::Internal(format!("token issuance failed: {e}")))?;

    state.repo.store_refresh_token(user_id, &pair.refresh).await?;

    Ok(TokenPairResponse {
        id: user_id,
        access_token: pair.access,
        refresh_token: pair.refresh,
    })
}

/// signup
///
/// [Public Route] Registers a new account and signs it in at once.
///
/// The password is hashed before anything is stored; the duplicate-email check
/// is done up front for a friendly message, with the unique constraint
/// backstopping the race between check and insert.
#[utoipa::path(
    post,
    path = "/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Account created", body = TokenPairResponse),
        (status = 400, description = "Password mismatch or email taken")
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<TokenPairResponse>, ApiError> {
    if payload.password != payload.password_confirm {
        return Err(ApiError::BadRequest(
            "password confirmation does not match".to_string(),
        ));
    }

    if state
        .repo
        .get_user_by_email(&payload.email)
        .await?
        .is_some()
    {
        return Err(ApiError::BadRequest(
            "email is already registered".to_string(),
        ));
    }

    let password_hash = password::hash_password(&payload.password)?;

    let user = state
        .repo
        .create_user(&payload.email, &password_hash, payload.name.as_deref())
        .await
        .map_err(|e| {
            if error::is_unique_violation(&e) {
                // Lost the race against a concurrent signup with the same email.
                ApiError::BadRequest("email is already registered".to_string())
            } else {
                ApiError::from(e)
            }
        })?;

    issue_session(&state, user.id).await.map(Json)
}

/// signin
///
/// [Public Route] Exchanges credentials for a token pair.
///
/// Unknown email and wrong password produce the same 401, so the endpoint
/// cannot be used to probe which addresses have accounts.
#[utoipa::path(
    post,
    path = "/auth/signin",
    request_body = SigninRequest,
    responses(
        (status = 200, description = "Signed in", body = TokenPairResponse),
        (status = 401, description = "Bad credentials")
    )
)]
pub async fn signin(
    State(state): State<AppState>,
    Json(payload): Json<SigninRequest>,
) -> Result<Json<TokenPairResponse>, ApiError> {
    let user = state
        .repo
        .get_user_by_email(&payload.email)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    password::verify_password(&payload.password, &user.password)?;

    issue_session(&state, user.id).await.map(Json)
}

/// refresh
///
/// [Refresh Route] Rotates the caller's session: a valid refresh token buys a
/// brand-new access/refresh pair, and the new refresh token atomically
/// replaces the stored one.
///
/// The route layer has already verified the token and required refresh kind;
/// this handler only has to compare the presented token against the stored
/// one. A mismatch means the token was superseded (or revoked) — a stale
/// token is a 400, not a 401, because the credential itself verified fine.
#[utoipa::path(
    post,
    path = "/auth/refresh",
    responses(
        (status = 200, description = "Session rotated", body = TokenPairResponse),
        (status = 400, description = "Refresh token superseded"),
        (status = 401, description = "Missing/invalid/wrong-kind token")
    )
)]
pub async fn refresh(
    AuthUser { id: user_id, .. }: AuthUser,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<TokenPairResponse>, ApiError> {
    // Same extraction function the guard used; no second stripping convention.
    let presented = auth::bearer_token(&headers)?;

    match state.repo.get_refresh_token(user_id).await? {
        Some(ref stored) if stored.token == presented => {}
        _ => {
            return Err(ApiError::BadRequest(
                "refresh token is no longer valid".to_string(),
            ));
        }
    }

    issue_session(&state, user_id).await.map(Json)
}

// --- User Handlers ---

/// get_me
///
/// [Authenticated Route] The authenticated user's own profile.
#[utoipa::path(
    get,
    path = "/me",
    responses((status = 200, description = "Profile", body = UserProfile))
)]
pub async fn get_me(
    AuthUser { id, .. }: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<UserProfile>, ApiError> {
    let user = state
        .repo
        .get_user(id)
        .await?
        .ok_or(ApiError::NotFound("user"))?;

    Ok(Json(UserProfile {
        id: user.id,
        email: user.email,
        name: user.name,
        role: user.role,
        created_at: user.created_at,
    }))
}

/// get_user
///
/// [Authenticated Route] The public-safe view of any user record.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "Found", body = UserResponse),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .repo
        .get_user(id)
        .await?
        .ok_or(ApiError::NotFound("user"))?;

    Ok(Json(UserResponse {
        id: user.id,
        email: user.email,
        created_at: user.created_at,
    }))
}

// --- Post Handlers ---

/// get_posts
///
/// [Public Route] Lists posts newest-first, enriched with author name,
/// category name, and comment count.
#[utoipa::path(
    get,
    path = "/posts",
    params(PostFilter),
    responses((status = 200, description = "List posts", body = [PostSummary]))
)]
pub async fn get_posts(
    State(state): State<AppState>,
    Query(filter): Query<PostFilter>,
) -> Result<Json<Vec<PostSummary>>, ApiError> {
    Ok(Json(state.repo.get_posts(filter.category).await?))
}

/// get_posts_page
///
/// [Public Route] Paged post listing: the requested slice plus the unpaged
/// total for the client's page controls.
#[utoipa::path(
    get,
    path = "/posts/pagination",
    params(PostPageFilter),
    responses((status = 200, description = "Page of posts", body = PostPage))
)]
pub async fn get_posts_page(
    State(state): State<AppState>,
    Query(filter): Query<PostPageFilter>,
) -> Result<Json<PostPage>, ApiError> {
    let (page, limit) = page_bounds(filter.page, filter.limit);
    Ok(Json(
        state.repo.get_posts_page(page, limit, filter.category).await?,
    ))
}

/// get_post_details
///
/// [Public Route] Retrieves a single post by ID.
#[utoipa::path(
    get,
    path = "/posts/{id}",
    params(("id" = Uuid, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Found", body = Post),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_post_details(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Post>, ApiError> {
    state
        .repo
        .get_post(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("post"))
}

/// create_post
///
/// [Authenticated Route] Submits a new post. The author is taken from the
/// resolved identity, never from the payload; the referenced category must
/// exist.
#[utoipa::path(
    post,
    path = "/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 200, description = "Created", body = Post),
        (status = 404, description = "Category not found")
    )
)]
pub async fn create_post(
    AuthUser { id, .. }: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<Json<Post>, ApiError> {
    state
        .repo
        .get_category(payload.category_id)
        .await?
        .ok_or(ApiError::NotFound("category"))?;

    Ok(Json(state.repo.create_post(id, payload).await?))
}

/// update_post
///
/// [Authenticated Route] Partial update of a post.
///
/// *Authorization*: existence first (404), then the unified ownership check
/// (403) — a non-owner learns the post exists, not its mutability. Admins pass
/// the ownership check on any post.
#[utoipa::path(
    put,
    path = "/posts/{id}",
    params(("id" = Uuid, Path, description = "Post ID")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Updated", body = Post),
        (status = 403, description = "Not Owner"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_post(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePostRequest>,
) -> Result<Json<Post>, ApiError> {
    let post = state
        .repo
        .get_post(id)
        .await?
        .ok_or(ApiError::NotFound("post"))?;

    if !user.can_mutate(Some(post.author_id)) {
        return Err(ApiError::Forbidden);
    }

    if let Some(category_id) = payload.category_id {
        state
            .repo
            .get_category(category_id)
            .await?
            .ok_or(ApiError::NotFound("category"))?;
    }

    state
        .repo
        .update_post(id, payload)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("post"))
}

/// delete_post
///
/// [Authenticated Route] Deletes a post and its whole comment thread.
///
/// *Authorization*: existence first (404), then the unified ownership
/// check (403).
#[utoipa::path(
    delete,
    path = "/posts/{id}",
    params(("id" = Uuid, Path, description = "Post ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 403, description = "Not Owner"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_post(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let post = state
        .repo
        .get_post(id)
        .await?
        .ok_or(ApiError::NotFound("post"))?;

    if !user.can_mutate(Some(post.author_id)) {
        return Err(ApiError::Forbidden);
    }

    state.repo.delete_post(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// --- Comment Handlers ---

/// get_comments
///
/// [Public Route] Top-level comments of a post in conversation order. An
/// unknown post simply yields an empty list here; only mutations insist on
/// existence.
#[utoipa::path(
    get,
    path = "/posts/{id}/comments",
    params(("id" = Uuid, Path, description = "Post ID")),
    responses((status = 200, description = "Comments", body = [CommentResponse]))
)]
pub async fn get_comments(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<Vec<CommentResponse>>, ApiError> {
    Ok(Json(state.repo.get_comments(post_id).await?))
}

/// get_comments_page
///
/// [Public Route] Paged top-level comments, newest first.
#[utoipa::path(
    get,
    path = "/posts/{id}/comments/pagination",
    params(
        ("id" = Uuid, Path, description = "Post ID"),
        PageFilter
    ),
    responses((status = 200, description = "Page of comments", body = CommentPage))
)]
pub async fn get_comments_page(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
    Query(filter): Query<PageFilter>,
) -> Result<Json<CommentPage>, ApiError> {
    let (page, limit) = page_bounds(filter.page, filter.limit);
    Ok(Json(
        state.repo.get_comments_page(post_id, page, limit).await?,
    ))
}

/// get_replies
///
/// [Public Route] The replies hanging off one comment, oldest first.
#[utoipa::path(
    get,
    path = "/posts/{id}/comments/{parent_id}/replies",
    params(
        ("id" = Uuid, Path, description = "Post ID"),
        ("parent_id" = Uuid, Path, description = "Parent comment ID")
    ),
    responses((status = 200, description = "Replies", body = [CommentResponse]))
)]
pub async fn get_replies(
    State(state): State<AppState>,
    Path((post_id, parent_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Vec<CommentResponse>>, ApiError> {
    Ok(Json(state.repo.get_replies(post_id, parent_id).await?))
}

/// add_comment
///
/// [Authenticated Route] Posts a comment, or a reply when `parentId` is set.
/// The post must exist; a reply's parent must exist on the same post.
#[utoipa::path(
    post,
    path = "/posts/{id}/comments",
    params(("id" = Uuid, Path, description = "Post ID")),
    request_body = CreateCommentRequest,
    responses(
        (status = 200, description = "Comment added", body = CommentResponse),
        (status = 400, description = "Empty content or cross-post parent"),
        (status = 404, description = "Post or parent not found")
    )
)]
pub async fn add_comment(
    AuthUser { id: user_id, .. }: AuthUser,
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<Json<CommentResponse>, ApiError> {
    if payload.content.trim().is_empty() {
        return Err(ApiError::BadRequest("content must not be empty".to_string()));
    }

    state
        .repo
        .get_post(post_id)
        .await?
        .ok_or(ApiError::NotFound("post"))?;

    if let Some(parent_id) = payload.parent_id {
        let parent = state
            .repo
            .get_comment(parent_id)
            .await?
            .ok_or(ApiError::NotFound("comment"))?;

        if parent.post_id != post_id {
            return Err(ApiError::BadRequest(
                "parent comment belongs to a different post".to_string(),
            ));
        }
    }

    Ok(Json(
        state
            .repo
            .add_comment(post_id, user_id, payload.parent_id, &payload.content)
            .await?,
    ))
}

/// delete_comment
///
/// [Authenticated Route] Deletes a comment together with its replies and
/// their likes.
///
/// *Authorization*: existence first (404), then the unified ownership
/// check (403); admins pass on any comment.
#[utoipa::path(
    delete,
    path = "/comments/{id}",
    params(("id" = Uuid, Path, description = "Comment ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 403, description = "Not Owner"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_comment(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let comment = state
        .repo
        .get_comment(id)
        .await?
        .ok_or(ApiError::NotFound("comment"))?;

    if !user.can_mutate(Some(comment.author_id)) {
        return Err(ApiError::Forbidden);
    }

    state.repo.delete_comment(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// delete_post_comments
///
/// [Authenticated Route] Wipes the entire comment section of a post.
///
/// *Authorization*: gated on the **post's** owner (or admin) — moderating a
/// thread belongs to whoever owns the post, not to the individual commenters.
#[utoipa::path(
    delete,
    path = "/posts/{id}/comments",
    params(("id" = Uuid, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Comments wiped", body = DeletedCount),
        (status = 403, description = "Not Owner"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_post_comments(
    user: AuthUser,
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<DeletedCount>, ApiError> {
    let post = state
        .repo
        .get_post(post_id)
        .await?
        .ok_or(ApiError::NotFound("post"))?;

    if !user.can_mutate(Some(post.author_id)) {
        return Err(ApiError::Forbidden);
    }

    let count = state.repo.delete_post_comments(post_id).await?;

    Ok(Json(DeletedCount { count }))
}

/// like_comment
///
/// [Authenticated Route] Records a like on a comment.
///
/// *Idempotency*: the composite primary key on `comment_likes` enforces
/// one-like-per-user-per-comment; a duplicate is reported as 409.
#[utoipa::path(
    post,
    path = "/comments/{id}/like",
    params(("id" = Uuid, Path, description = "Comment ID")),
    responses(
        (status = 200, description = "Liked"),
        (status = 404, description = "Comment not found"),
        (status = 409, description = "Already liked")
    )
)]
pub async fn like_comment(
    AuthUser { id: user_id, .. }: AuthUser,
    State(state): State<AppState>,
    Path(comment_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let comment = state
        .repo
        .get_comment(comment_id)
        .await?
        .ok_or(ApiError::NotFound("comment"))?;

    match state
        .repo
        .like_comment(user_id, comment_id, comment.post_id)
        .await?
    {
        true => Ok(StatusCode::OK),
        false => Err(ApiError::Conflict("comment already liked".to_string())),
    }
}

/// unlike_comment
///
/// [Authenticated Route] Removes the caller's like from a comment.
#[utoipa::path(
    delete,
    path = "/comments/{id}/like",
    params(("id" = Uuid, Path, description = "Comment ID")),
    responses(
        (status = 204, description = "Unliked"),
        (status = 404, description = "No like to remove")
    )
)]
pub async fn unlike_comment(
    AuthUser { id: user_id, .. }: AuthUser,
    State(state): State<AppState>,
    Path(comment_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.repo.unlike_comment(user_id, comment_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("like"))
    }
}

// --- Category Handlers ---

/// create_category
///
/// [Authenticated Route] Creates a category. Categories are ownerless, so the
/// ownership check runs with `None` — any authenticated identity passes, and
/// the policy stays in one place instead of being implicit.
#[utoipa::path(
    post,
    path = "/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "Created", body = Category),
        (status = 400, description = "Empty name"),
        (status = 409, description = "Name taken")
    )
)]
pub async fn create_category(
    user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<Json<Category>, ApiError> {
    if !user.can_mutate(None) {
        return Err(ApiError::Forbidden);
    }

    if payload.name.trim().is_empty() {
        return Err(ApiError::BadRequest("name must not be empty".to_string()));
    }

    state
        .repo
        .create_category(&payload.name)
        .await
        .map(Json)
        .map_err(|e| {
            if error::is_unique_violation(&e) {
                ApiError::Conflict("category already exists".to_string())
            } else {
                ApiError::from(e)
            }
        })
}

/// get_categories
///
/// [Public Route] The full category list for the navigation bar.
#[utoipa::path(
    get,
    path = "/categories",
    responses((status = 200, description = "Categories", body = [Category]))
)]
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(state.repo.get_categories().await?))
}

/// get_category
///
/// [Public Route] One category by ID.
#[utoipa::path(
    get,
    path = "/categories/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Found", body = Category),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Category>, ApiError> {
    state
        .repo
        .get_category(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("category"))
}

/// rename_category
///
/// [Authenticated Route] Renames a category (ownerless policy, see
/// `create_category`).
#[utoipa::path(
    patch,
    path = "/categories/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Renamed", body = Category),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Name taken")
    )
)]
pub async fn rename_category(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> Result<Json<Category>, ApiError> {
    if !user.can_mutate(None) {
        return Err(ApiError::Forbidden);
    }

    if payload.name.trim().is_empty() {
        return Err(ApiError::BadRequest("name must not be empty".to_string()));
    }

    state
        .repo
        .rename_category(id, &payload.name)
        .await
        .map_err(|e| {
            if error::is_unique_violation(&e) {
                ApiError::Conflict("category already exists".to_string())
            } else {
                ApiError::from(e)
            }
        })?
        .map(Json)
        .ok_or(ApiError::NotFound("category"))
}

/// delete_category
///
/// [Authenticated Route] Deletes a category (ownerless policy). A category
/// still referenced by posts stays put and reports a conflict.
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Still referenced by posts")
    )
)]
pub async fn delete_category(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if !user.can_mutate(None) {
        return Err(ApiError::Forbidden);
    }

    match state.repo.delete_category(id).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err(ApiError::NotFound("category")),
        Err(e) if error::is_foreign_key_violation(&e) => Err(ApiError::Conflict(
            "category is still referenced by posts".to_string(),
        )),
        Err(e) => Err(e.into()),
    }
}

// --- Admin Handlers ---

/// get_admin_users
///
/// [Admin Route] Paged listing of all registered users.
///
/// *RBAC*: the Admin role was already enforced by the admin route layer, so
/// the handler carries no role check of its own.
#[utoipa::path(
    get,
    path = "/admin/users",
    params(PageFilter),
    responses((status = 200, description = "Users", body = [UserResponse]))
)]
pub async fn get_admin_users(
    State(state): State<AppState>,
    Query(filter): Query<PageFilter>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let (page, limit) = page_bounds(filter.page, filter.limit);
    Ok(Json(state.repo.get_users(page, limit).await?))
}

/// get_admin_stats
///
/// [Admin Route] Core application counters for the dashboard.
#[utoipa::path(
    get,
    path = "/admin/stats",
    responses((status = 200, description = "Stats", body = BoardStats))
)]
pub async fn get_admin_stats(State(state): State<AppState>) -> Result<Json<BoardStats>, ApiError> {
    Ok(Json(state.repo.get_stats().await?))
}

/// delete_post_admin
///
/// [Admin Route] Force-deletes any post regardless of ownership. The route
/// layer's role gate is the entire authorization; only existence is checked
/// here.
#[utoipa::path(
    delete,
    path = "/admin/posts/{id}",
    params(("id" = Uuid, Path, description = "Post ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_post_admin(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .repo
        .get_post(id)
        .await?
        .ok_or(ApiError::NotFound("post"))?;

    state.repo.delete_post(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
