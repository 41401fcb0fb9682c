//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{CommentId, PostId};

use crate::domain::entities::{Comment, CommentDetails, Post, PostDetails};
use crate::domain::pagination::{PageRequest, Paged};
use crate::error::BlogResult;

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Create a new post
    async fn create(&self, post: &Post) -> BlogResult<()>;

    /// Find a post with author username and read-time comment count
    async fn find_by_id(&self, post_id: &PostId) -> BlogResult<Option<PostDetails>>;

    /// Check if a post exists
    async fn exists(&self, post_id: &PostId) -> BlogResult<bool>;

    /// Update title/content/updated_at
    async fn update(&self, post: &Post) -> BlogResult<()>;

    /// Delete a post (its comments go with it)
    async fn delete(&self, post_id: &PostId) -> BlogResult<()>;

    /// One page of posts, newest first
    async fn list(&self, page: &PageRequest) -> BlogResult<Paged<PostDetails>>;

    /// One page of posts matching the keyword (case-insensitive substring
    /// on title or content), newest first
    async fn search(&self, keyword: &str, page: &PageRequest) -> BlogResult<Paged<PostDetails>>;
}

/// Comment repository trait
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    /// Create a new comment
    async fn create(&self, comment: &Comment) -> BlogResult<()>;

    /// Find a comment with its author username
    async fn find_by_id(&self, comment_id: &CommentId) -> BlogResult<Option<CommentDetails>>;

    /// All comments for a post, newest first
    async fn list_by_post(&self, post_id: &PostId) -> BlogResult<Vec<CommentDetails>>;

    /// Update comment content
    async fn update(&self, comment: &Comment) -> BlogResult<()>;

    /// Delete a comment
    async fn delete(&self, comment_id: &CommentId) -> BlogResult<()>;
}
