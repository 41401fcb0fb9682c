//! Delete Comment Use Case
//!
//! Fetch → ownership check → remove.

use std::sync::Arc;

use kernel::id::CommentId;
use kernel::identity::CurrentUser;

use crate::domain::policy::require_owner;
use crate::domain::repository::CommentRepository;
use crate::error::{BlogError, BlogResult};

/// Delete comment use case
pub struct DeleteCommentUseCase<C>
where
    C: CommentRepository,
{
    repo: Arc<C>,
}

impl<C> DeleteCommentUseCase<C>
where
    C: CommentRepository,
{
    pub fn new(repo: Arc<C>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, comment_id: &CommentId, user: &CurrentUser) -> BlogResult<()> {
        let details = self
            .repo
            .find_by_id(comment_id)
            .await?
            .ok_or(BlogError::CommentNotFound)?;

        require_owner(&details.author_username, user)?;

        self.repo.delete(comment_id).await?;

        tracing::info!(comment_id = %comment_id, author = %user.username, "Comment deleted");

        Ok(())
    }
}
