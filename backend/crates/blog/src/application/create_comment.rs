//! Create Comment Use Case
//!
//! The parent post must exist at creation time; no orphan comments are
//! ever created.

use std::sync::Arc;

use kernel::id::{PostId, UserId};
use kernel::identity::CurrentUser;

use crate::domain::entities::{Comment, CommentDetails};
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::error::{BlogError, BlogResult};

/// Create comment input
pub struct CreateCommentInput {
    pub content: String,
    pub post_id: PostId,
}

/// Create comment use case
pub struct CreateCommentUseCase<P, C>
where
    P: PostRepository,
    C: CommentRepository,
{
    post_repo: Arc<P>,
    comment_repo: Arc<C>,
}

impl<P, C> CreateCommentUseCase<P, C>
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

    pub async fn execute(
        &self,
        input: CreateCommentInput,
        user: &CurrentUser,
    ) -> BlogResult<CommentDetails> {
        Comment::validate_fields(&input.content).map_err(BlogError::Validation)?;

        if !self.post_repo.exists(&input.post_id).await? {
            return Err(BlogError::PostNotFound);
        }

        let comment = Comment::new(
            input.content,
            input.post_id,
            UserId::from_uuid(user.user_id),
        );

        self.comment_repo.create(&comment).await?;

        tracing::info!(
            comment_id = %comment.comment_id,
            post_id = %comment.post_id,
            author = %user.username,
            "Comment created"
        );

        Ok(CommentDetails {
            comment,
            author_username: user.username.clone(),
        })
    }
}
