//! Domain Entities
//!
//! Core business entities for the blog domain.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, PostId, UserId};

/// Maximum post title length (characters)
pub const POST_TITLE_MAX_LENGTH: usize = 255;

/// Post entity
#[derive(Debug, Clone)]
pub struct Post {
    pub post_id: PostId,
    pub title: String,
    pub content: String,
    /// Owner; the only identity allowed to mutate or delete this post
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post
    pub fn new(title: String, content: String, author_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            post_id: PostId::new(),
            title,
            content,
            author_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an edit, bumping the updated timestamp
    pub fn apply_edit(&mut self, title: String, content: String) {
        self.title = title;
        self.content = content;
        self.updated_at = Utc::now();
    }

    /// Validate request fields, collecting every failure
    pub fn validate_fields(title: &str, content: &str) -> Result<(), BTreeMap<String, String>> {
        let mut errors = BTreeMap::new();

        if title.trim().is_empty() {
            errors.insert("title".to_string(), "Title is required".to_string());
        } else if title.chars().count() > POST_TITLE_MAX_LENGTH {
            errors.insert(
                "title".to_string(),
                format!("Title must not exceed {} characters", POST_TITLE_MAX_LENGTH),
            );
        }

        if content.trim().is_empty() {
            errors.insert("content".to_string(), "Content is required".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Comment entity
#[derive(Debug, Clone)]
pub struct Comment {
    pub comment_id: CommentId,
    pub content: String,
    /// Parent post; must exist when the comment is created
    pub post_id: PostId,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment
    pub fn new(content: String, post_id: PostId, author_id: UserId) -> Self {
        Self {
            comment_id: CommentId::new(),
            content,
            post_id,
            author_id,
            created_at: Utc::now(),
        }
    }

    /// Apply an edit (content only; comments cannot be re-parented)
    pub fn apply_edit(&mut self, content: String) {
        self.content = content;
    }

    /// Validate request fields
    pub fn validate_fields(content: &str) -> Result<(), BTreeMap<String, String>> {
        let mut errors = BTreeMap::new();

        if content.trim().is_empty() {
            errors.insert("content".to_string(), "Content is required".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Post read model: entity plus the derived attributes responses need
///
/// `comment_count` is computed against the store at read time, never
/// cached, so it cannot go stale under concurrent comment churn.
#[derive(Debug, Clone)]
pub struct PostDetails {
    pub post: Post,
    pub author_username: String,
    pub comment_count: i64,
}

/// Comment read model
#[derive(Debug, Clone)]
pub struct CommentDetails {
    pub comment: Comment,
    pub author_username: String,
}
