use async_trait::async_trait;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use chrono::Utc;
use std::sync::{Arc, Mutex};
use tokio::test;
use uuid::Uuid;
use vlog_board::{
    AppState,
    auth::AuthUser,
    config::AppConfig,
    handlers,
    models::{
        BoardStats, Category, Comment, CommentPage, CommentResponse, CreateCategoryRequest,
        CreateCommentRequest, CreatePostRequest, Post, PostPage, PostSummary, RefreshToken, Role,
        SigninRequest, SignupRequest, UpdatePostRequest, User, UserResponse,
    },
    password,
    repository::Repository,
    token::{TokenCodec, TokenKind},
};

// --- MOCK REPOSITORY IMPLEMENTATION ---

// This struct is the central control point for testing handler logic.
// Handlers rely on the Repository trait, so we mock the trait implementation.
pub struct MockRepoControl {
    // Pre-canned lookups
    pub user_to_return: Option<User>,
    pub post_to_return: Option<Post>,
    pub comment_to_return: Option<Comment>,
    pub category_to_return: Option<Category>,
    pub posts_to_return: Vec<PostSummary>,
    pub users_to_return: Vec<UserResponse>,
    pub stats_to_return: BoardStats,

    // Pre-canned outcomes
    pub like_result: bool,
    pub unlike_result: bool,
    pub delete_category_result: bool,
    pub deleted_comments: u64,

    // Records the refresh-token upsert so rotation can be asserted.
    pub stored_refresh: Mutex<Option<RefreshToken>>,
}

impl Default for MockRepoControl {
    fn default() -> Self {
        MockRepoControl {
            user_to_return: None,
            post_to_return: Some(Post::default()),
            comment_to_return: Some(Comment::default()),
            category_to_return: Some(Category::default()),
            posts_to_return: vec![],
            users_to_return: vec![],
            stats_to_return: BoardStats::default(),
            like_result: true, // Default to success for simpler tests
            unlike_result: true,
            delete_category_result: true,
            deleted_comments: 3,
            stored_refresh: Mutex::new(None),
        }
    }
}

#[async_trait]
impl Repository for MockRepoControl {
    async fn get_user(&self, _id: Uuid) -> Result<Option<User>, sqlx::Error> {
        Ok(self.user_to_return.clone())
    }
    async fn get_user_by_email(&self, _email: &str) -> Result<Option<User>, sqlx::Error> {
        Ok(self.user_to_return.clone())
    }
    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        name: Option<&str>,
    ) -> Result<User, sqlx::Error> {
        Ok(User {
            id: TEST_USER_ID,
            email: email.to_string(),
            password: password_hash.to_string(),
            name: name.map(str::to_string),
            ..User::default()
        })
    }
    async fn get_users(&self, _page: i64, _limit: i64) -> Result<Vec<UserResponse>, sqlx::Error> {
        Ok(self.users_to_return.clone())
    }

    async fn store_refresh_token(&self, user_id: Uuid, token: &str) -> Result<(), sqlx::Error> {
        *self.stored_refresh.lock().unwrap() = Some(RefreshToken {
            user_id,
            token: token.to_string(),
            created_at: Utc::now(),
        });
        Ok(())
    }
    async fn get_refresh_token(&self, _user_id: Uuid) -> Result<Option<RefreshToken>, sqlx::Error> {
        Ok(self.stored_refresh.lock().unwrap().clone())
    }

    async fn create_post(
        &self,
        author_id: Uuid,
        req: CreatePostRequest,
    ) -> Result<Post, sqlx::Error> {
        Ok(Post {
            id: TEST_POST_ID,
            author_id,
            category_id: req.category_id,
            title: req.title,
            content: req.content,
            published: req.published,
            highlight: req.highlight,
            image: req.image,
            ..Post::default()
        })
    }
    async fn get_post(&self, _id: Uuid) -> Result<Option<Post>, sqlx::Error> {
        Ok(self.post_to_return.clone())
    }
    async fn get_posts(&self, _category: Option<Uuid>) -> Result<Vec<PostSummary>, sqlx::Error> {
        Ok(self.posts_to_return.clone())
    }
    async fn get_posts_page(
        &self,
        _page: i64,
        _limit: i64,
        _category: Option<Uuid>,
    ) -> Result<PostPage, sqlx::Error> {
        Ok(PostPage {
            items: self.posts_to_return.clone(),
            total: self.posts_to_return.len() as i64,
        })
    }
    async fn update_post(
        &self,
        _id: Uuid,
        _req: UpdatePostRequest,
    ) -> Result<Option<Post>, sqlx::Error> {
        Ok(self.post_to_return.clone())
    }
    async fn delete_post(&self, _id: Uuid) -> Result<(), sqlx::Error> {
        Ok(())
    }

    async fn add_comment(
        &self,
        post_id: Uuid,
        author_id: Uuid,
        parent_id: Option<Uuid>,
        content: &str,
    ) -> Result<CommentResponse, sqlx::Error> {
        Ok(CommentResponse {
            id: TEST_COMMENT_ID,
            post_id,
            author_id,
            parent_id,
            content: content.to_string(),
            ..CommentResponse::default()
        })
    }
    async fn get_comment(&self, _id: Uuid) -> Result<Option<Comment>, sqlx::Error> {
        Ok(self.comment_to_return.clone())
    }
    async fn get_comments(&self, _post_id: Uuid) -> Result<Vec<CommentResponse>, sqlx::Error> {
        Ok(vec![])
    }
    async fn get_comments_page(
        &self,
        _post_id: Uuid,
        _page: i64,
        _limit: i64,
    ) -> Result<CommentPage, sqlx::Error> {
        Ok(CommentPage::default())
    }
    async fn get_replies(
        &self,
        _post_id: Uuid,
        _parent_id: Uuid,
    ) -> Result<Vec<CommentResponse>, sqlx::Error> {
        Ok(vec![])
    }
    async fn delete_comment(&self, _id: Uuid) -> Result<(), sqlx::Error> {
        Ok(())
    }
    async fn delete_post_comments(&self, _post_id: Uuid) -> Result<u64, sqlx::Error> {
        Ok(self.deleted_comments)
    }

    async fn like_comment(
        &self,
        _user_id: Uuid,
        _comment_id: Uuid,
        _post_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        Ok(self.like_result)
    }
    async fn unlike_comment(&self, _user_id: Uuid, _comment_id: Uuid) -> Result<bool, sqlx::Error> {
        Ok(self.unlike_result)
    }

    async fn create_category(&self, name: &str) -> Result<Category, sqlx::Error> {
        Ok(Category {
            id: TEST_CATEGORY_ID,
            name: name.to_string(),
        })
    }
    async fn get_categories(&self) -> Result<Vec<Category>, sqlx::Error> {
        Ok(vec![])
    }
    async fn get_category(&self, _id: Uuid) -> Result<Option<Category>, sqlx::Error> {
        Ok(self.category_to_return.clone())
    }
    async fn rename_category(
        &self,
        _id: Uuid,
        name: &str,
    ) -> Result<Option<Category>, sqlx::Error> {
        Ok(self.category_to_return.clone().map(|mut c| {
            c.name = name.to_string();
            c
        }))
    }
    async fn delete_category(&self, _id: Uuid) -> Result<bool, sqlx::Error> {
        Ok(self.delete_category_result)
    }

    async fn get_stats(&self) -> Result<BoardStats, sqlx::Error> {
        Ok(self.stats_to_return.clone())
    }
}

// --- TEST UTILITIES ---

const TEST_USER_ID: Uuid = Uuid::from_u128(123);
const TEST_OTHER_ID: Uuid = Uuid::from_u128(124);
const TEST_ADMIN_ID: Uuid = Uuid::from_u128(456);
const TEST_POST_ID: Uuid = Uuid::from_u128(1001);
const TEST_COMMENT_ID: Uuid = Uuid::from_u128(2001);
const TEST_CATEGORY_ID: Uuid = Uuid::from_u128(3001);

// Creates an AppState around the mock, keeping a handle for post-assertions.
fn create_test_state(repo_control: MockRepoControl) -> (Arc<MockRepoControl>, AppState) {
    let mock = Arc::new(repo_control);
    let config = AppConfig::default();
    let state = AppState {
        repo: mock.clone(),
        codec: TokenCodec::new(&config),
        config,
    };
    (mock, state)
}

// Creates AuthUser values for direct handler calls.
fn owner_user() -> AuthUser {
    AuthUser {
        id: TEST_USER_ID,
        role: Role::User,
    }
}
fn other_user() -> AuthUser {
    AuthUser {
        id: TEST_OTHER_ID,
        role: Role::User,
    }
}
fn admin_user() -> AuthUser {
    AuthUser {
        id: TEST_ADMIN_ID,
        role: Role::Admin,
    }
}

fn owned_post() -> Post {
    Post {
        id: TEST_POST_ID,
        author_id: TEST_USER_ID,
        ..Post::default()
    }
}

fn owned_comment() -> Comment {
    Comment {
        id: TEST_COMMENT_ID,
        post_id: TEST_POST_ID,
        author_id: TEST_USER_ID,
        ..Comment::default()
    }
}

fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        header::HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

fn status_of(err: vlog_board::ApiError) -> StatusCode {
    err.into_response().status()
}

// --- AUTH FLOW TESTS ---

#[test]
async fn test_signup_password_mismatch() {
    let (_, state) = create_test_state(MockRepoControl::default());

    let payload = SignupRequest {
        email: "new@example.com".to_string(),
        password: "secret-one".to_string(),
        password_confirm: "secret-two".to_string(),
        name: None,
    };

    let result = handlers::signup(State(state), Json(payload)).await;

    assert_eq!(status_of(result.unwrap_err()), StatusCode::BAD_REQUEST);
}

#[test]
async fn test_signup_duplicate_email() {
    let (_, state) = create_test_state(MockRepoControl {
        user_to_return: Some(User::default()), // Email already registered.
        ..MockRepoControl::default()
    });

    let payload = SignupRequest {
        email: "taken@example.com".to_string(),
        password: "secret".to_string(),
        password_confirm: "secret".to_string(),
        name: None,
    };

    let result = handlers::signup(State(state), Json(payload)).await;

    assert_eq!(status_of(result.unwrap_err()), StatusCode::BAD_REQUEST);
}

#[test]
async fn test_signup_success_issues_pair_and_stores_refresh() {
    let (mock, state) = create_test_state(MockRepoControl::default());
    let codec = state.codec.clone();

    let payload = SignupRequest {
        email: "new@example.com".to_string(),
        password: "secret".to_string(),
        password_confirm: "secret".to_string(),
        name: Some("Newcomer".to_string()),
    };

    let Json(resp) = handlers::signup(State(state), Json(payload)).await.unwrap();

    assert_eq!(resp.id, TEST_USER_ID);

    // Both tokens verify and carry the right kinds.
    let access = codec.verify(&resp.access_token).unwrap();
    assert_eq!(access.sub, TEST_USER_ID);
    assert_eq!(access.token_type, TokenKind::Access);
    let refresh = codec.verify(&resp.refresh_token).unwrap();
    assert_eq!(refresh.token_type, TokenKind::Refresh);

    // The refresh token was persisted via the upsert.
    let stored = mock.stored_refresh.lock().unwrap().clone().unwrap();
    assert_eq!(stored.user_id, TEST_USER_ID);
    assert_eq!(stored.token, resp.refresh_token);
}

#[test]
async fn test_signin_unknown_email() {
    let (_, state) = create_test_state(MockRepoControl::default());

    let payload = SigninRequest {
        email: "nobody@example.com".to_string(),
        password: "whatever".to_string(),
    };

    let result = handlers::signin(State(state), Json(payload)).await;

    assert_eq!(status_of(result.unwrap_err()), StatusCode::UNAUTHORIZED);
}

#[test]
async fn test_signin_wrong_password() {
    let stored_user = User {
        id: TEST_USER_ID,
        email: "user@example.com".to_string(),
        password: password::hash_password("the-right-password").unwrap(),
        ..User::default()
    };
    let (_, state) = create_test_state(MockRepoControl {
        user_to_return: Some(stored_user),
        ..MockRepoControl::default()
    });

    let payload = SigninRequest {
        email: "user@example.com".to_string(),
        password: "the-wrong-password".to_string(),
    };

    let result = handlers::signin(State(state), Json(payload)).await;

    // Same status as an unknown email: no account probing.
    assert_eq!(status_of(result.unwrap_err()), StatusCode::UNAUTHORIZED);
}

#[test]
async fn test_signin_success() {
    let stored_user = User {
        id: TEST_USER_ID,
        email: "user@example.com".to_string(),
        password: password::hash_password("correct horse").unwrap(),
        ..User::default()
    };
    let (mock, state) = create_test_state(MockRepoControl {
        user_to_return: Some(stored_user),
        ..MockRepoControl::default()
    });
    let codec = state.codec.clone();

    let payload = SigninRequest {
        email: "user@example.com".to_string(),
        password: "correct horse".to_string(),
    };

    let Json(resp) = handlers::signin(State(state), Json(payload)).await.unwrap();

    assert_eq!(resp.id, TEST_USER_ID);
    assert!(codec.verify(&resp.access_token).is_ok());
    assert!(mock.stored_refresh.lock().unwrap().is_some());
}

#[test]
async fn test_refresh_rotates_stored_token() {
    let (mock, state) = create_test_state(MockRepoControl::default());

    // Seed the store with the currently-live refresh token.
    *mock.stored_refresh.lock().unwrap() = Some(RefreshToken {
        user_id: TEST_USER_ID,
        token: "previously-issued-refresh-token".to_string(),
        created_at: Utc::now(),
    });

    let headers = bearer_headers("previously-issued-refresh-token");
    let Json(resp) = handlers::refresh(owner_user(), State(state), headers)
        .await
        .unwrap();

    // The stored token is the freshly minted one, not the presented one.
    let stored = mock.stored_refresh.lock().unwrap().clone().unwrap();
    assert_eq!(stored.token, resp.refresh_token);
    assert_ne!(stored.token, "previously-issued-refresh-token");
}

#[test]
async fn test_refresh_rejects_superseded_token() {
    let (mock, state) = create_test_state(MockRepoControl::default());

    // A later rotation already replaced this token.
    *mock.stored_refresh.lock().unwrap() = Some(RefreshToken {
        user_id: TEST_USER_ID,
        token: "the-current-token".to_string(),
        created_at: Utc::now(),
    });

    let headers = bearer_headers("an-older-superseded-token");
    let result = handlers::refresh(owner_user(), State(state), headers).await;

    assert_eq!(status_of(result.unwrap_err()), StatusCode::BAD_REQUEST);
    // The stored token is untouched by the failed attempt.
    let stored = mock.stored_refresh.lock().unwrap().clone().unwrap();
    assert_eq!(stored.token, "the-current-token");
}

#[test]
async fn test_refresh_rejects_when_nothing_stored() {
    let (_, state) = create_test_state(MockRepoControl::default());

    let headers = bearer_headers("any-token-at-all");
    let result = handlers::refresh(owner_user(), State(state), headers).await;

    assert_eq!(status_of(result.unwrap_err()), StatusCode::BAD_REQUEST);
}

// --- OWNERSHIP TESTS ---

#[test]
async fn test_update_post_missing_post_is_404_even_for_stranger() {
    let (_, state) = create_test_state(MockRepoControl {
        post_to_return: None,
        ..MockRepoControl::default()
    });

    let result = handlers::update_post(
        other_user(),
        State(state),
        Path(TEST_POST_ID),
        Json(UpdatePostRequest::default()),
    )
    .await;

    // Existence is decided before ownership: 404, never 403, for a ghost.
    assert_eq!(status_of(result.unwrap_err()), StatusCode::NOT_FOUND);
}

#[test]
async fn test_update_post_stranger_forbidden() {
    let (_, state) = create_test_state(MockRepoControl {
        post_to_return: Some(owned_post()),
        ..MockRepoControl::default()
    });

    let result = handlers::update_post(
        other_user(),
        State(state),
        Path(TEST_POST_ID),
        Json(UpdatePostRequest::default()),
    )
    .await;

    assert_eq!(status_of(result.unwrap_err()), StatusCode::FORBIDDEN);
}

#[test]
async fn test_update_post_owner_succeeds() {
    let (_, state) = create_test_state(MockRepoControl {
        post_to_return: Some(owned_post()),
        ..MockRepoControl::default()
    });

    let result = handlers::update_post(
        owner_user(),
        State(state),
        Path(TEST_POST_ID),
        Json(UpdatePostRequest {
            title: Some("Edited".to_string()),
            ..UpdatePostRequest::default()
        }),
    )
    .await;

    assert!(result.is_ok());
}

#[test]
async fn test_update_post_admin_overrides_ownership() {
    let (_, state) = create_test_state(MockRepoControl {
        post_to_return: Some(owned_post()),
        ..MockRepoControl::default()
    });

    let result = handlers::update_post(
        admin_user(),
        State(state),
        Path(TEST_POST_ID),
        Json(UpdatePostRequest::default()),
    )
    .await;

    assert!(result.is_ok());
}

#[test]
async fn test_delete_post_stranger_forbidden() {
    let (_, state) = create_test_state(MockRepoControl {
        post_to_return: Some(owned_post()),
        ..MockRepoControl::default()
    });

    let result = handlers::delete_post(other_user(), State(state), Path(TEST_POST_ID)).await;

    assert_eq!(status_of(result.unwrap_err()), StatusCode::FORBIDDEN);
}

#[test]
async fn test_delete_post_owner_succeeds() {
    let (_, state) = create_test_state(MockRepoControl {
        post_to_return: Some(owned_post()),
        ..MockRepoControl::default()
    });

    let result = handlers::delete_post(owner_user(), State(state), Path(TEST_POST_ID)).await;

    assert_eq!(result.unwrap(), StatusCode::NO_CONTENT);
}

#[test]
async fn test_delete_comment_stranger_forbidden() {
    let (_, state) = create_test_state(MockRepoControl {
        comment_to_return: Some(owned_comment()),
        ..MockRepoControl::default()
    });

    let result = handlers::delete_comment(other_user(), State(state), Path(TEST_COMMENT_ID)).await;

    assert_eq!(status_of(result.unwrap_err()), StatusCode::FORBIDDEN);
}

#[test]
async fn test_delete_post_comments_gated_on_post_owner() {
    let (_, state) = create_test_state(MockRepoControl {
        post_to_return: Some(owned_post()),
        ..MockRepoControl::default()
    });

    // A commenter who does not own the post cannot wipe the thread.
    let result =
        handlers::delete_post_comments(other_user(), State(state.clone()), Path(TEST_POST_ID))
            .await;
    assert_eq!(status_of(result.unwrap_err()), StatusCode::FORBIDDEN);

    // The post's owner can.
    let Json(deleted) = handlers::delete_post_comments(owner_user(), State(state), Path(TEST_POST_ID))
        .await
        .unwrap();
    assert_eq!(deleted.count, 3);
}

// --- COMMENT & LIKE TESTS ---

#[test]
async fn test_add_comment_empty_content() {
    let (_, state) = create_test_state(MockRepoControl::default());

    let payload = CreateCommentRequest {
        content: "   ".to_string(),
        parent_id: None,
    };

    let result =
        handlers::add_comment(owner_user(), State(state), Path(TEST_POST_ID), Json(payload)).await;

    assert_eq!(status_of(result.unwrap_err()), StatusCode::BAD_REQUEST);
}

#[test]
async fn test_add_comment_missing_post() {
    let (_, state) = create_test_state(MockRepoControl {
        post_to_return: None,
        ..MockRepoControl::default()
    });

    let payload = CreateCommentRequest {
        content: "hello".to_string(),
        parent_id: None,
    };

    let result =
        handlers::add_comment(owner_user(), State(state), Path(TEST_POST_ID), Json(payload)).await;

    assert_eq!(status_of(result.unwrap_err()), StatusCode::NOT_FOUND);
}

#[test]
async fn test_add_reply_rejects_cross_post_parent() {
    let parent_on_other_post = Comment {
        id: TEST_COMMENT_ID,
        post_id: Uuid::from_u128(9999), // Not the post being commented on.
        author_id: TEST_USER_ID,
        ..Comment::default()
    };
    let (_, state) = create_test_state(MockRepoControl {
        post_to_return: Some(owned_post()),
        comment_to_return: Some(parent_on_other_post),
        ..MockRepoControl::default()
    });

    let payload = CreateCommentRequest {
        content: "a reply".to_string(),
        parent_id: Some(TEST_COMMENT_ID),
    };

    let result =
        handlers::add_comment(owner_user(), State(state), Path(TEST_POST_ID), Json(payload)).await;

    assert_eq!(status_of(result.unwrap_err()), StatusCode::BAD_REQUEST);
}

#[test]
async fn test_add_reply_success_carries_parent() {
    let (_, state) = create_test_state(MockRepoControl {
        post_to_return: Some(owned_post()),
        comment_to_return: Some(owned_comment()),
        ..MockRepoControl::default()
    });

    let payload = CreateCommentRequest {
        content: "a reply".to_string(),
        parent_id: Some(TEST_COMMENT_ID),
    };

    let Json(comment) =
        handlers::add_comment(owner_user(), State(state), Path(TEST_POST_ID), Json(payload))
            .await
            .unwrap();

    assert_eq!(comment.parent_id, Some(TEST_COMMENT_ID));
    assert_eq!(comment.post_id, TEST_POST_ID);
}

#[test]
async fn test_like_comment_success() {
    let (_, state) = create_test_state(MockRepoControl {
        comment_to_return: Some(owned_comment()),
        like_result: true,
        ..MockRepoControl::default()
    });

    let result = handlers::like_comment(other_user(), State(state), Path(TEST_COMMENT_ID)).await;

    assert_eq!(result.unwrap(), StatusCode::OK);
}

#[test]
async fn test_like_comment_twice_conflicts() {
    let (_, state) = create_test_state(MockRepoControl {
        comment_to_return: Some(owned_comment()),
        like_result: false, // The composite key swallowed the insert.
        ..MockRepoControl::default()
    });

    let result = handlers::like_comment(other_user(), State(state), Path(TEST_COMMENT_ID)).await;

    assert_eq!(status_of(result.unwrap_err()), StatusCode::CONFLICT);
}

#[test]
async fn test_unlike_comment_without_like_is_404() {
    let (_, state) = create_test_state(MockRepoControl {
        unlike_result: false,
        ..MockRepoControl::default()
    });

    let result = handlers::unlike_comment(other_user(), State(state), Path(TEST_COMMENT_ID)).await;

    assert_eq!(status_of(result.unwrap_err()), StatusCode::NOT_FOUND);
}

// --- CATEGORY TESTS ---

#[test]
async fn test_create_category_empty_name() {
    let (_, state) = create_test_state(MockRepoControl::default());

    let payload = CreateCategoryRequest {
        name: "  ".to_string(),
    };

    let result = handlers::create_category(owner_user(), State(state), Json(payload)).await;

    assert_eq!(status_of(result.unwrap_err()), StatusCode::BAD_REQUEST);
}

#[test]
async fn test_create_category_open_to_any_authenticated_user() {
    let (_, state) = create_test_state(MockRepoControl::default());

    let payload = CreateCategoryRequest {
        name: "rust".to_string(),
    };

    // Plain (non-admin) users may manage ownerless categories.
    let Json(category) = handlers::create_category(other_user(), State(state), Json(payload))
        .await
        .unwrap();

    assert_eq!(category.name, "rust");
}

#[test]
async fn test_delete_category_not_found() {
    let (_, state) = create_test_state(MockRepoControl {
        delete_category_result: false,
        ..MockRepoControl::default()
    });

    let result = handlers::delete_category(owner_user(), State(state), Path(TEST_CATEGORY_ID)).await;

    assert_eq!(status_of(result.unwrap_err()), StatusCode::NOT_FOUND);
}

#[test]
async fn test_delete_category_success() {
    let (_, state) = create_test_state(MockRepoControl::default());

    let result = handlers::delete_category(owner_user(), State(state), Path(TEST_CATEGORY_ID)).await;

    assert_eq!(result.unwrap(), StatusCode::NO_CONTENT);
}

// --- POST CREATION & LISTING TESTS ---

#[test]
async fn test_create_post_unknown_category() {
    let (_, state) = create_test_state(MockRepoControl {
        category_to_return: None,
        ..MockRepoControl::default()
    });

    let payload = CreatePostRequest {
        title: "First post".to_string(),
        category_id: TEST_CATEGORY_ID,
        ..CreatePostRequest::default()
    };

    let result = handlers::create_post(owner_user(), State(state), Json(payload)).await;

    assert_eq!(status_of(result.unwrap_err()), StatusCode::NOT_FOUND);
}

#[test]
async fn test_create_post_author_is_caller() {
    let (_, state) = create_test_state(MockRepoControl::default());

    let payload = CreatePostRequest {
        title: "First post".to_string(),
        category_id: TEST_CATEGORY_ID,
        ..CreatePostRequest::default()
    };

    let Json(post) = handlers::create_post(owner_user(), State(state), Json(payload))
        .await
        .unwrap();

    // The author comes from the resolved identity, not the payload.
    assert_eq!(post.author_id, TEST_USER_ID);
}

#[test]
async fn test_get_posts_page_clamps_bounds() {
    let (_, state) = create_test_state(MockRepoControl::default());

    // Nonsense paging input is normalized, not an error.
    let filter = handlers::PostPageFilter {
        page: Some(-5),
        limit: Some(100_000),
        category: None,
    };

    let result = handlers::get_posts_page(State(state), Query(filter)).await;

    assert!(result.is_ok());
}

// --- ADMIN TESTS ---

#[test]
async fn test_get_admin_stats_returns_counters() {
    let (_, state) = create_test_state(MockRepoControl {
        stats_to_return: BoardStats {
            total_users: 4,
            total_posts: 9,
            total_comments: 21,
            total_categories: 3,
        },
        ..MockRepoControl::default()
    });

    let Json(stats) = handlers::get_admin_stats(State(state)).await.unwrap();

    assert_eq!(stats.total_posts, 9);
    assert_eq!(stats.total_comments, 21);
}

#[test]
async fn test_admin_force_delete_skips_ownership() {
    // Post owned by an ordinary user; the admin handler has no ownership gate.
    let (_, state) = create_test_state(MockRepoControl {
        post_to_return: Some(owned_post()),
        ..MockRepoControl::default()
    });

    let result = handlers::delete_post_admin(State(state), Path(TEST_POST_ID)).await;

    assert_eq!(result.unwrap(), StatusCode::NO_CONTENT);
}

#[test]
async fn test_admin_force_delete_missing_post() {
    let (_, state) = create_test_state(MockRepoControl {
        post_to_return: None,
        ..MockRepoControl::default()
    });

    let result = handlers::delete_post_admin(State(state), Path(TEST_POST_ID)).await;

    assert_eq!(status_of(result.unwrap_err()), StatusCode::NOT_FOUND);
}
