use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

// All wire payloads use camelCase, matching the token claim `tokenType` and the
// API the frontend already speaks. Rust fields stay snake_case; SQL aliases in
// the repository match the Rust field names, which is what FromRow binds on.

// --- Core Application Schemas (Mapped to Database) ---

/// Role
///
/// The RBAC field stored as text on the `users` table. Admins pass every
/// ownership check; everything else requires being the resource owner.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema, sqlx::Type, Default,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[ts(export)]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// User
///
/// The canonical identity record from the `users` table. Deliberately not
/// `Serialize`: the stored password hash must never appear in a response body.
/// Outbound shapes are `UserResponse` and `UserProfile`.
#[derive(Debug, Clone, FromRow, Default)]
pub struct User {
    pub id: Uuid,
    // Unique; signup rejects duplicates.
    pub email: String,
    // Argon2 PHC string, never plaintext.
    pub password: String,
    pub name: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// RefreshToken
///
/// One row per user in `refresh_tokens`; rotation overwrites the row via an
/// atomic upsert, so there is never more than one live refresh token per user.
#[derive(Debug, Clone, FromRow, Default)]
pub struct RefreshToken {
    pub user_id: Uuid,
    pub token: String,
    pub created_at: DateTime<Utc>,
}

/// Post
///
/// A board post from the `posts` table. `author_id` is the ownership anchor
/// every mutation is checked against.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Post {
    pub id: Uuid,
    // FK to users.id (Owner).
    pub author_id: Uuid,
    // FK to categories.id; validated to exist on create/update.
    pub category_id: Uuid,
    pub title: String,
    pub content: Option<String>,
    // Draft/published toggle; drafts still appear in listings (visibility
    // filtering is a frontend concern in this board).
    pub published: bool,
    // Editorial pin for the landing page.
    pub highlight: bool,
    // Cover image URL, set by the client.
    pub image: Option<String>,

    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// PostSummary
///
/// Listing view of a post, enriched with author name, category name, and
/// comment count (JOIN + subquery in the repository).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PostSummary {
    pub id: Uuid,
    pub title: String,
    pub content: Option<String>,
    pub author_id: Uuid,
    // users.name is optional, so the joined value is too.
    pub author_name: Option<String>,
    pub category_id: Uuid,
    pub category_name: String,
    pub published: bool,
    pub highlight: bool,
    pub image: Option<String>,
    pub comment_count: i64,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

/// PostPage
///
/// Paged listing response: the requested slice plus the unpaged total so the
/// client can render page controls.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PostPage {
    pub items: Vec<PostSummary>,
    pub total: i64,
}

/// Comment
///
/// Raw comment row from the `comments` table. `parent_id` makes a row a reply
/// to another comment on the same post.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    // FK to users.id (Owner).
    pub author_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub content: String,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

/// CommentResponse
///
/// Comment enriched for display: author name plus reply and like counts,
/// produced by the repository's joined queries.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CommentResponse {
    pub id: Uuid,
    pub post_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub author_id: Uuid,
    pub author_name: Option<String>,
    pub content: String,
    pub reply_count: i64,
    pub like_count: i64,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

/// CommentPage
///
/// Paged comment listing response, same shape convention as `PostPage`.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CommentPage {
    pub items: Vec<CommentResponse>,
    pub total: i64,
}

/// CommentLike
///
/// A single like record in `comment_likes`. `(user_id, comment_id)` is the
/// primary key; `post_id` is carried so deleting a post can wipe its likes
/// in one statement.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CommentLike {
    pub user_id: Uuid,
    pub comment_id: Uuid,
    pub post_id: Uuid,
}

/// Category
///
/// A post category from the `categories` table. Categories have no owner;
/// any authenticated user may manage them.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Category {
    pub id: Uuid,
    // Unique; duplicate creation is a conflict.
    pub name: String,
}

// --- Request Payloads (Input Schemas) ---

/// SignupRequest
///
/// Input payload for POST /auth/signup. The password is hashed immediately and
/// never persisted or logged in plaintext.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub name: Option<String>,
}

/// SigninRequest
///
/// Input payload for POST /auth/signin.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

/// CreatePostRequest
///
/// Input payload for submitting a new post (POST /posts). The referenced
/// category must exist.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: Option<String>,
    pub published: bool,
    pub highlight: bool,
    pub image: Option<String>,
    pub category_id: Uuid,
}

/// UpdatePostRequest
///
/// Partial update payload for PUT /posts/{id}.
///
/// Uses `Option<T>` for all fields and `#[serde(skip_serializing_if = "Option::is_none")]`
/// so only the provided fields travel in the JSON payload; the repository keeps
/// the stored value for anything omitted.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UpdatePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
}

/// CreateCommentRequest
///
/// Input payload for posting a comment. A present `parent_id` makes this a
/// reply; the parent must exist on the same post.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreateCommentRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
}

/// CreateCategoryRequest
///
/// Input payload for POST /categories.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreateCategoryRequest {
    pub name: String,
}

/// UpdateCategoryRequest
///
/// Input payload for PATCH /categories/{id}.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UpdateCategoryRequest {
    pub name: String,
}

// --- Auth & Profile Schemas (Output) ---

/// TokenPairResponse
///
/// Output of signup, signin, and refresh: the subject id plus a fresh
/// access/refresh token pair.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TokenPairResponse {
    pub id: Uuid,
    pub access_token: String,
    pub refresh_token: String,
}

/// UserResponse
///
/// The public-safe view of a user record (GET /users/{id}, admin listing).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

/// UserProfile
///
/// Output schema for the authenticated user's own profile (GET /me).
/// Provides a slightly richer set of data than `UserResponse`.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub role: Role,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

// --- Dashboard & Bulk Operation Schemas (Output) ---

/// BoardStats
///
/// Output schema for the administrative statistics endpoint (GET /admin/stats).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BoardStats {
    pub total_users: i64,
    pub total_posts: i64,
    pub total_comments: i64,
    pub total_categories: i64,
}

/// DeletedCount
///
/// Result of a bulk delete (e.g. wiping a post's comments): how many rows went.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DeletedCount {
    pub count: u64,
}
