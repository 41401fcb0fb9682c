//! PostgreSQL Repository Implementations
//!
//! Post/comment queries join `users` for the author username and compute
//! the comment count with a subquery, so responses never carry cached
//! counts. Post deletion relies on `ON DELETE CASCADE` for comments.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use kernel::id::{CommentId, PostId, UserId};

use crate::domain::entities::{Comment, CommentDetails, Post, PostDetails};
use crate::domain::pagination::{PageRequest, Paged};
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::error::BlogResult;

const POST_SELECT: &str = r#"
    SELECT
        p.post_id,
        p.title,
        p.content,
        p.author_id,
        p.created_at,
        p.updated_at,
        u.user_name AS author_username,
        (SELECT COUNT(*) FROM comments c WHERE c.post_id = p.post_id) AS comment_count
    FROM posts p
    JOIN users u ON u.user_id = p.author_id
"#;

const COMMENT_SELECT: &str = r#"
    SELECT
        c.comment_id,
        c.content,
        c.post_id,
        c.author_id,
        c.created_at,
        u.user_name AS author_username
    FROM comments c
    JOIN users u ON u.user_id = c.author_id
"#;

/// PostgreSQL-backed blog repository
#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for PgBlogRepository {
    async fn create(&self, post: &Post) -> BlogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                post_id,
                title,
                content,
                author_id,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.author_id.as_uuid())
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> BlogResult<Option<PostDetails>> {
        let sql = format!("{POST_SELECT} WHERE p.post_id = $1");

        let row = sqlx::query_as::<_, PostDetailsRow>(&sql)
            .bind(post_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.into_details()))
    }

    async fn exists(&self, post_id: &PostId) -> BlogResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM posts WHERE post_id = $1)")
                .bind(post_id.as_uuid())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn update(&self, post: &Post) -> BlogResult<()> {
        sqlx::query(
            r#"
            UPDATE posts SET
                title = $2,
                content = $3,
                updated_at = $4
            WHERE post_id = $1
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, post_id: &PostId) -> BlogResult<()> {
        // Comments go with the post via ON DELETE CASCADE
        sqlx::query("DELETE FROM posts WHERE post_id = $1")
            .bind(post_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn list(&self, page: &PageRequest) -> BlogResult<Paged<PostDetails>> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await?;

        let sql = format!("{POST_SELECT} ORDER BY p.created_at DESC LIMIT $1 OFFSET $2");

        let rows = sqlx::query_as::<_, PostDetailsRow>(&sql)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok(Paged {
            items: rows.into_iter().map(|r| r.into_details()).collect(),
            total: total as u64,
        })
    }

    async fn search(&self, keyword: &str, page: &PageRequest) -> BlogResult<Paged<PostDetails>> {
        let pattern = format!("%{}%", keyword);

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM posts WHERE title ILIKE $1 OR content ILIKE $1",
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await?;

        let sql = format!(
            "{POST_SELECT} WHERE p.title ILIKE $1 OR p.content ILIKE $1 \
             ORDER BY p.created_at DESC LIMIT $2 OFFSET $3"
        );

        let rows = sqlx::query_as::<_, PostDetailsRow>(&sql)
            .bind(&pattern)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok(Paged {
            items: rows.into_iter().map(|r| r.into_details()).collect(),
            total: total as u64,
        })
    }
}

// ============================================================================
// Comment Repository Implementation
// ============================================================================

impl CommentRepository for PgBlogRepository {
    async fn create(&self, comment: &Comment) -> BlogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (
                comment_id,
                content,
                post_id,
                author_id,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(comment.comment_id.as_uuid())
        .bind(&comment.content)
        .bind(comment.post_id.as_uuid())
        .bind(comment.author_id.as_uuid())
        .bind(comment.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, comment_id: &CommentId) -> BlogResult<Option<CommentDetails>> {
        let sql = format!("{COMMENT_SELECT} WHERE c.comment_id = $1");

        let row = sqlx::query_as::<_, CommentDetailsRow>(&sql)
            .bind(comment_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.into_details()))
    }

    async fn list_by_post(&self, post_id: &PostId) -> BlogResult<Vec<CommentDetails>> {
        let sql = format!("{COMMENT_SELECT} WHERE c.post_id = $1 ORDER BY c.created_at DESC");

        let rows = sqlx::query_as::<_, CommentDetailsRow>(&sql)
            .bind(post_id.as_uuid())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|r| r.into_details()).collect())
    }

    async fn update(&self, comment: &Comment) -> BlogResult<()> {
        sqlx::query("UPDATE comments SET content = $2 WHERE comment_id = $1")
            .bind(comment.comment_id.as_uuid())
            .bind(&comment.content)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, comment_id: &CommentId) -> BlogResult<()> {
        sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(comment_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostDetailsRow {
    post_id: Uuid,
    title: String,
    content: String,
    author_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_username: String,
    comment_count: i64,
}

impl PostDetailsRow {
    fn into_details(self) -> PostDetails {
        PostDetails {
            post: Post {
                post_id: PostId::from_uuid(self.post_id),
                title: self.title,
                content: self.content,
                author_id: UserId::from_uuid(self.author_id),
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            author_username: self.author_username,
            comment_count: self.comment_count,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentDetailsRow {
    comment_id: Uuid,
    content: String,
    post_id: Uuid,
    author_id: Uuid,
    created_at: DateTime<Utc>,
    author_username: String,
}

impl CommentDetailsRow {
    fn into_details(self) -> CommentDetails {
        CommentDetails {
            comment: Comment {
                comment_id: CommentId::from_uuid(self.comment_id),
                content: self.content,
                post_id: PostId::from_uuid(self.post_id),
                author_id: UserId::from_uuid(self.author_id),
                created_at: self.created_at,
            },
            author_username: self.author_username,
        }
    }
}
