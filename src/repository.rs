use crate::models::{
    BoardStats, Category, Comment, CommentResponse, CreatePostRequest, Post, PostPage,
    PostSummary, RefreshToken, Role, UpdatePostRequest, User, UserResponse,
};
use async_trait::async_trait;
use sqlx::{PgPool, query_builder::QueryBuilder};
use std::sync::Arc;
use uuid::Uuid;

/// Repository Trait
///
/// Defines the abstract contract for all persistence operations. Handlers and
/// the access guard interact with the data layer through this trait without
/// knowing the specific implementation (Postgres, Mock, etc.).
///
/// Every method returns `Result<_, sqlx::Error>`: callers need to distinguish
/// "row absent" (`Ok(None)`, a 404 or a deny) from "lookup failed" (an `Err`
/// that gets logged and normalized). Logging happens at the call site, where
/// the request context lives.
///
/// **Send + Sync + async_trait** are required to make the trait object
/// (`Arc<dyn Repository>`) safely shareable across Axum's task boundaries.
#[async_trait]
pub trait Repository: Send + Sync {
    // --- Users & Identity ---
    // Point lookup by primary key; the identity resolution step of the access
    // guard calls this at most once per request.
    async fn get_user(&self, id: Uuid) -> Result<Option<User>, sqlx::Error>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error>;
    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        name: Option<&str>,
    ) -> Result<User, sqlx::Error>;
    // Admin listing, paged.
    async fn get_users(&self, page: i64, limit: i64) -> Result<Vec<UserResponse>, sqlx::Error>;

    // --- Refresh Tokens ---
    // Atomic upsert: concurrent rotations for one user cannot lose updates.
    async fn store_refresh_token(&self, user_id: Uuid, token: &str) -> Result<(), sqlx::Error>;
    async fn get_refresh_token(&self, user_id: Uuid) -> Result<Option<RefreshToken>, sqlx::Error>;

    // --- Posts ---
    async fn create_post(
        &self,
        author_id: Uuid,
        req: CreatePostRequest,
    ) -> Result<Post, sqlx::Error>;
    async fn get_post(&self, id: Uuid) -> Result<Option<Post>, sqlx::Error>;
    // Public listing, newest first, optionally narrowed to one category.
    async fn get_posts(&self, category: Option<Uuid>) -> Result<Vec<PostSummary>, sqlx::Error>;
    async fn get_posts_page(
        &self,
        page: i64,
        limit: i64,
        category: Option<Uuid>,
    ) -> Result<PostPage, sqlx::Error>;
    // Partial update via COALESCE; returns None when the post vanished.
    async fn update_post(
        &self,
        id: Uuid,
        req: UpdatePostRequest,
    ) -> Result<Option<Post>, sqlx::Error>;
    // Transactional cascade: likes, comments, then the post row.
    async fn delete_post(&self, id: Uuid) -> Result<(), sqlx::Error>;

    // --- Comments ---
    async fn add_comment(
        &self,
        post_id: Uuid,
        author_id: Uuid,
        parent_id: Option<Uuid>,
        content: &str,
    ) -> Result<CommentResponse, sqlx::Error>;
    async fn get_comment(&self, id: Uuid) -> Result<Option<Comment>, sqlx::Error>;
    // Top-level comments of a post (replies are fetched per parent).
    async fn get_comments(&self, post_id: Uuid) -> Result<Vec<CommentResponse>, sqlx::Error>;
    async fn get_comments_page(
        &self,
        post_id: Uuid,
        page: i64,
        limit: i64,
    ) -> Result<crate::models::CommentPage, sqlx::Error>;
    async fn get_replies(
        &self,
        post_id: Uuid,
        parent_id: Uuid,
    ) -> Result<Vec<CommentResponse>, sqlx::Error>;
    // Transactional cascade: likes of the comment and its replies, replies,
    // then the comment itself.
    async fn delete_comment(&self, id: Uuid) -> Result<(), sqlx::Error>;
    // Wipes every comment (and like) of a post; returns how many comments went.
    async fn delete_post_comments(&self, post_id: Uuid) -> Result<u64, sqlx::Error>;

    // --- Comment Likes ---
    // Idempotent insert: returns true only if a new row was created.
    async fn like_comment(
        &self,
        user_id: Uuid,
        comment_id: Uuid,
        post_id: Uuid,
    ) -> Result<bool, sqlx::Error>;
    async fn unlike_comment(&self, user_id: Uuid, comment_id: Uuid) -> Result<bool, sqlx::Error>;

    // --- Categories ---
    async fn create_category(&self, name: &str) -> Result<Category, sqlx::Error>;
    async fn get_categories(&self) -> Result<Vec<Category>, sqlx::Error>;
    async fn get_category(&self, id: Uuid) -> Result<Option<Category>, sqlx::Error>;
    async fn rename_category(&self, id: Uuid, name: &str)
    -> Result<Option<Category>, sqlx::Error>;
    async fn delete_category(&self, id: Uuid) -> Result<bool, sqlx::Error>;

    // --- Admin ---
    async fn get_stats(&self) -> Result<BoardStats, sqlx::Error>;
}

/// RepositoryState
///
/// The concrete type used to share the persistence layer access across the application state.
pub type RepositoryState = Arc<dyn Repository>;

/// PostgresRepository
///
/// The concrete implementation of the `Repository` trait, backed by the PostgreSQL database.
/// All queries are runtime-bound (`query_as`/`QueryBuilder` with `push_bind`),
/// so the crate builds without a live database while still being fully
/// parameterized — no string interpolation of user input anywhere.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Creates a new repository instance using the initialized connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Shared SELECT list for the enriched comment shape. The two COUNT subqueries
// feed the reply/like badges the frontend renders on every comment row.
const COMMENT_RESPONSE_COLUMNS: &str = r#"
    c.id, c.post_id, c.parent_id, c.author_id, u.name AS author_name, c.content,
    (SELECT COUNT(*) FROM comments r WHERE r.parent_id = c.id) AS reply_count,
    (SELECT COUNT(*) FROM comment_likes l WHERE l.comment_id = c.id) AS like_count,
    c.created_at
"#;

// Shared SELECT list for the enriched post listing shape.
const POST_SUMMARY_COLUMNS: &str = r#"
    p.id, p.title, p.content, p.author_id, u.name AS author_name,
    p.category_id, cat.name AS category_name, p.published, p.highlight, p.image,
    (SELECT COUNT(*) FROM comments cm WHERE cm.post_id = p.id) AS comment_count,
    p.created_at
"#;

#[async_trait]
impl Repository for PostgresRepository {
    // --- USERS & IDENTITY ---

    /// get_user
    ///
    /// Retrieves the full user record needed for identity resolution and
    /// profile rendering. `Ok(None)` means the subject no longer exists.
    async fn get_user(&self, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT id, email, password, name, role, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// get_user_by_email
    ///
    /// Credential lookup for signin and the duplicate check at signup.
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT id, email, password, name, role, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
    }

    /// create_user
    ///
    /// Inserts a new user with the default role. The unique constraint on
    /// `email` backstops the handler's duplicate check; a violation surfaces
    /// as `Err` for the handler to map.
    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        name: Option<&str>,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, password, name, role, created_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING id, email, password, name, role, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .bind(password_hash)
        .bind(name)
        .bind(Role::User)
        .fetch_one(&self.pool)
        .await
    }

    /// get_users
    ///
    /// Admin listing, oldest first so page numbers stay stable as users sign up.
    async fn get_users(&self, page: i64, limit: i64) -> Result<Vec<UserResponse>, sqlx::Error> {
        sqlx::query_as::<_, UserResponse>(
            r#"
            SELECT id, email, created_at
            FROM users
            ORDER BY created_at ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind((page - 1) * limit)
        .fetch_all(&self.pool)
        .await
    }

    // --- REFRESH TOKENS ---

    /// store_refresh_token
    ///
    /// One row per user; rotation is a single atomic upsert so two concurrent
    /// refresh calls cannot interleave a read-then-write and lose one update.
    async fn store_refresh_token(&self, user_id: Uuid, token: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO refresh_tokens (user_id, token, created_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (user_id) DO UPDATE SET token = EXCLUDED.token, created_at = NOW()
            "#,
        )
        .bind(user_id)
        .bind(token)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// get_refresh_token
    ///
    /// The currently stored refresh token for a user, if any.
    async fn get_refresh_token(&self, user_id: Uuid) -> Result<Option<RefreshToken>, sqlx::Error> {
        sqlx::query_as::<_, RefreshToken>(
            "SELECT user_id, token, created_at FROM refresh_tokens WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }

    // --- POSTS ---

    /// create_post
    ///
    /// Inserts a new post owned by `author_id`. Category existence is checked
    /// by the handler beforehand; the FK constraint backstops it.
    async fn create_post(
        &self,
        author_id: Uuid,
        req: CreatePostRequest,
    ) -> Result<Post, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (id, author_id, category_id, title, content, published, highlight, image, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW(), NOW())
            RETURNING id, author_id, category_id, title, content, published, highlight, image, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(author_id)
        .bind(req.category_id)
        .bind(req.title)
        .bind(req.content)
        .bind(req.published)
        .bind(req.highlight)
        .bind(req.image)
        .fetch_one(&self.pool)
        .await
    }

    /// get_post
    ///
    /// Simple retrieval of any post by ID. Handlers use this both for the
    /// public detail view and as the existence/ownership anchor before
    /// mutations.
    async fn get_post(&self, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            r#"
            SELECT id, author_id, category_id, title, content, published, highlight, image, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// get_posts
    ///
    /// Public listing with the optional category filter applied through
    /// QueryBuilder's `push_bind` for safe parameterization.
    async fn get_posts(&self, category: Option<Uuid>) -> Result<Vec<PostSummary>, sqlx::Error> {
        let mut builder: QueryBuilder<sqlx::Postgres> = QueryBuilder::new(format!(
            r#"
            SELECT {POST_SUMMARY_COLUMNS}
            FROM posts p
            JOIN users u ON p.author_id = u.id
            JOIN categories cat ON p.category_id = cat.id
            "#
        ));

        if let Some(cat) = category {
            builder.push(" WHERE p.category_id = ");
            builder.push_bind(cat);
        }

        builder.push(" ORDER BY p.created_at DESC");

        builder
            .build_query_as::<PostSummary>()
            .fetch_all(&self.pool)
            .await
    }

    /// get_posts_page
    ///
    /// Paged variant of `get_posts`: the requested slice plus the unpaged
    /// total, both honoring the same optional category filter.
    async fn get_posts_page(
        &self,
        page: i64,
        limit: i64,
        category: Option<Uuid>,
    ) -> Result<PostPage, sqlx::Error> {
        let mut builder: QueryBuilder<sqlx::Postgres> = QueryBuilder::new(format!(
            r#"
            SELECT {POST_SUMMARY_COLUMNS}
            FROM posts p
            JOIN users u ON p.author_id = u.id
            JOIN categories cat ON p.category_id = cat.id
            "#
        ));

        if let Some(cat) = category {
            builder.push(" WHERE p.category_id = ");
            builder.push_bind(cat);
        }

        builder.push(" ORDER BY p.created_at DESC LIMIT ");
        builder.push_bind(limit);
        builder.push(" OFFSET ");
        builder.push_bind((page - 1) * limit);

        let items = builder
            .build_query_as::<PostSummary>()
            .fetch_all(&self.pool)
            .await?;

        let mut count_builder: QueryBuilder<sqlx::Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM posts");

        if let Some(cat) = category {
            count_builder.push(" WHERE category_id = ");
            count_builder.push_bind(cat);
        }

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        Ok(PostPage { items, total })
    }

    /// update_post
    ///
    /// Partial update using PostgreSQL `COALESCE`: a column only changes when
    /// the corresponding request field is `Some`. Ownership has already been
    /// decided by the caller, so the WHERE clause is existence only.
    async fn update_post(
        &self,
        id: Uuid,
        req: UpdatePostRequest,
    ) -> Result<Option<Post>, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = COALESCE($2, title),
                content = COALESCE($3, content),
                published = COALESCE($4, published),
                highlight = COALESCE($5, highlight),
                image = COALESCE($6, image),
                category_id = COALESCE($7, category_id),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, author_id, category_id, title, content, published, highlight, image, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(req.title)
        .bind(req.content)
        .bind(req.published)
        .bind(req.highlight)
        .bind(req.image)
        .bind(req.category_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// delete_post
    ///
    /// Removes a post and everything hanging off it inside one transaction, so
    /// a failure midway leaves the thread fully intact rather than half-orphaned.
    async fn delete_post(&self, id: Uuid) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM comment_likes WHERE post_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM comments WHERE post_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await
    }

    // --- COMMENTS ---

    /// add_comment
    ///
    /// Inserts a comment (or reply, when `parent_id` is set) and immediately
    /// joins with `users` to return the enriched response shape. Uses a CTE
    /// (Common Table Expression) so the insert and join are one round trip.
    async fn add_comment(
        &self,
        post_id: Uuid,
        author_id: Uuid,
        parent_id: Option<Uuid>,
        content: &str,
    ) -> Result<CommentResponse, sqlx::Error> {
        sqlx::query_as::<_, CommentResponse>(
            r#"
            WITH inserted AS (
                INSERT INTO comments (id, post_id, author_id, parent_id, content, created_at)
                VALUES ($1, $2, $3, $4, $5, NOW())
                RETURNING id, post_id, author_id, parent_id, content, created_at
            )
            SELECT i.id, i.post_id, i.parent_id, i.author_id, u.name AS author_name, i.content,
                   CAST(0 AS BIGINT) AS reply_count, CAST(0 AS BIGINT) AS like_count,
                   i.created_at
            FROM inserted i
            JOIN users u ON i.author_id = u.id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(post_id)
        .bind(author_id)
        .bind(parent_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await
    }

    /// get_comment
    ///
    /// Raw comment row, used as the existence/ownership anchor before
    /// mutations and reply validation.
    async fn get_comment(&self, id: Uuid) -> Result<Option<Comment>, sqlx::Error> {
        sqlx::query_as::<_, Comment>(
            "SELECT id, post_id, author_id, parent_id, content, created_at FROM comments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// get_comments
    ///
    /// Top-level comments of a post in conversation order; replies hang off
    /// each row's `reply_count` and are fetched separately.
    async fn get_comments(&self, post_id: Uuid) -> Result<Vec<CommentResponse>, sqlx::Error> {
        sqlx::query_as::<_, CommentResponse>(&format!(
            r#"
            SELECT {COMMENT_RESPONSE_COLUMNS}
            FROM comments c
            JOIN users u ON c.author_id = u.id
            WHERE c.post_id = $1 AND c.parent_id IS NULL
            ORDER BY c.created_at ASC
            "#
        ))
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
    }

    /// get_comments_page
    ///
    /// Paged top-level comments, newest first, plus the unpaged total.
    async fn get_comments_page(
        &self,
        post_id: Uuid,
        page: i64,
        limit: i64,
    ) -> Result<crate::models::CommentPage, sqlx::Error> {
        let items = sqlx::query_as::<_, CommentResponse>(&format!(
            r#"
            SELECT {COMMENT_RESPONSE_COLUMNS}
            FROM comments c
            JOIN users u ON c.author_id = u.id
            WHERE c.post_id = $1 AND c.parent_id IS NULL
            ORDER BY c.created_at DESC
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(post_id)
        .bind(limit)
        .bind((page - 1) * limit)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM comments WHERE post_id = $1 AND parent_id IS NULL",
        )
        .bind(post_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(crate::models::CommentPage { items, total })
    }

    /// get_replies
    ///
    /// Replies of one comment, oldest first.
    async fn get_replies(
        &self,
        post_id: Uuid,
        parent_id: Uuid,
    ) -> Result<Vec<CommentResponse>, sqlx::Error> {
        sqlx::query_as::<_, CommentResponse>(&format!(
            r#"
            SELECT {COMMENT_RESPONSE_COLUMNS}
            FROM comments c
            JOIN users u ON c.author_id = u.id
            WHERE c.post_id = $1 AND c.parent_id = $2
            ORDER BY c.created_at ASC
            "#
        ))
        .bind(post_id)
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
    }

    /// delete_comment
    ///
    /// Removes a comment, its replies, and every like on any of them, in one
    /// transaction.
    async fn delete_comment(&self, id: Uuid) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            DELETE FROM comment_likes
            WHERE comment_id = $1
               OR comment_id IN (SELECT id FROM comments WHERE parent_id = $1)
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;
        sqlx::query("DELETE FROM comments WHERE parent_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await
    }

    /// delete_post_comments
    ///
    /// Wipes the whole comment section of a post (likes first), returning how
    /// many comments were removed.
    async fn delete_post_comments(&self, post_id: Uuid) -> Result<u64, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM comment_likes WHERE post_id = $1")
            .bind(post_id)
            .execute(&mut *tx)
            .await?;
        let deleted = sqlx::query("DELETE FROM comments WHERE post_id = $1")
            .bind(post_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(deleted.rows_affected())
    }

    // --- COMMENT LIKES ---

    /// like_comment
    ///
    /// Inserts a like. Uses `ON CONFLICT DO NOTHING` so a double-like is not a
    /// database error; the function returns true only if a new row was
    /// inserted (`rows_affected > 0`), letting the handler report the conflict.
    async fn like_comment(
        &self,
        user_id: Uuid,
        comment_id: Uuid,
        post_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO comment_likes (user_id, comment_id, post_id)
            VALUES ($1, $2, $3)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(comment_id)
        .bind(post_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// unlike_comment
    ///
    /// Removes the caller's like; true only when one actually existed.
    async fn unlike_comment(&self, user_id: Uuid, comment_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM comment_likes WHERE user_id = $1 AND comment_id = $2",
        )
        .bind(user_id)
        .bind(comment_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    // --- CATEGORIES ---

    /// create_category
    ///
    /// Inserts a category; the unique constraint on `name` surfaces duplicate
    /// creation as an `Err` the handler maps to a conflict.
    async fn create_category(&self, name: &str) -> Result<Category, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            "INSERT INTO categories (id, name) VALUES ($1, $2) RETURNING id, name",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .fetch_one(&self.pool)
        .await
    }

    /// get_categories
    ///
    /// The full category list for the navigation bar, alphabetical.
    async fn get_categories(&self) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
    }

    /// get_category
    async fn get_category(&self, id: Uuid) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// rename_category
    ///
    /// Returns the updated row, or None when the category vanished underneath
    /// the caller.
    async fn rename_category(
        &self,
        id: Uuid,
        name: &str,
    ) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            "UPDATE categories SET name = $2 WHERE id = $1 RETURNING id, name",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
    }

    /// delete_category
    ///
    /// Plain delete; a foreign-key violation (posts still reference it) comes
    /// back as `Err` for the handler to map to a conflict.
    async fn delete_category(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // --- ADMIN ---

    /// get_stats
    ///
    /// Compiles all counters for the administrative dashboard in a single call.
    async fn get_stats(&self) -> Result<BoardStats, sqlx::Error> {
        let total_users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        let total_posts: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await?;
        let total_comments: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments")
            .fetch_one(&self.pool)
            .await?;
        let total_categories: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;

        Ok(BoardStats {
            total_users,
            total_posts,
            total_comments,
            total_categories,
        })
    }
}
