//! Query Comments Use Case
//!
//! Public reads: by id, or all comments for a post (404 when the post
//! itself does not exist).

use std::sync::Arc;

use kernel::id::{CommentId, PostId};

use crate::domain::entities::CommentDetails;
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::error::{BlogError, BlogResult};

/// Query comments use case
pub struct QueryCommentsUseCase<P, C>
where
    P: PostRepository,
    C: CommentRepository,
{
    post_repo: Arc<P>,
    comment_repo: Arc<C>,
}

impl<P, C> QueryCommentsUseCase<P, C>
where
    P: PostRepository,
    C: CommentRepository,
{
    pub fn new(post_repo: Arc<P>, comment_repo: Arc<C>) -> Self {
        Self {
            post_repo,
            comment_repo,
        }
    }

    /// Get a single comment by id
    pub async fn get_by_id(&self, comment_id: &CommentId) -> BlogResult<CommentDetails> {
        self.comment_repo
            .find_by_id(comment_id)
            .await?
            .ok_or(BlogError::CommentNotFound)
    }

    /// All comments for a post, newest first
    pub async fn list_by_post(&self, post_id: &PostId) -> BlogResult<Vec<CommentDetails>> {
        if !self.post_repo.exists(post_id).await? {
            return Err(BlogError::PostNotFound);
        }

        self.comment_repo.list_by_post(post_id).await
    }
}
