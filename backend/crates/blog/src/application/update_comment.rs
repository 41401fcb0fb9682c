//! Update Comment Use Case
//!
//! Fetch → ownership check → mutate → persist. Only the content changes;
//! a comment cannot be moved to another post.

use std::sync::Arc;

use kernel::id::CommentId;
use kernel::identity::CurrentUser;

use crate::domain::entities::{Comment, CommentDetails};
use crate::domain::policy::require_owner;
use crate::domain::repository::CommentRepository;
use crate::error::{BlogError, BlogResult};

/// Update comment input
pub struct UpdateCommentInput {
    pub comment_id: CommentId,
    pub content: String,
}

/// Update comment use case
pub struct UpdateCommentUseCase<C>
where
    C: CommentRepository,
{
    repo: Arc<C>,
}

impl<C> UpdateCommentUseCase<C>
where
    C: CommentRepository,
{
    pub fn new(repo: Arc<C>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        input: UpdateCommentInput,
        user: &CurrentUser,
    ) -> BlogResult<CommentDetails> {
        Comment::validate_fields(&input.content).map_err(BlogError::Validation)?;

        let details = self
            .repo
            .find_by_id(&input.comment_id)
            .await?
            .ok_or(BlogError::CommentNotFound)?;

        require_owner(&details.author_username, user)?;

        let mut comment = details.comment;
        comment.apply_edit(input.content);

        self.repo.update(&comment).await?;

        tracing::info!(
            comment_id = %comment.comment_id,
            author = %user.username,
            "Comment updated"
        );

        Ok(CommentDetails {
            comment,
            author_username: details.author_username,
        })
    }
}
