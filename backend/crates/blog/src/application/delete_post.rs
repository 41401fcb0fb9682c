//! Delete Post Use Case
//!
//! Fetch → ownership check → delete. Comments on the post are removed
//! with it; no orphan rows remain.

use std::sync::Arc;

use kernel::id::PostId;
use kernel::identity::CurrentUser;

use crate::domain::policy::require_owner;
use crate::domain::repository::PostRepository;
use crate::error::{BlogError, BlogResult};

/// Delete post use case
pub struct DeletePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> DeletePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, post_id: &PostId, user: &CurrentUser) -> BlogResult<()> {
        let details = self
            .repo
            .find_by_id(post_id)
            .await?
            .ok_or(BlogError::PostNotFound)?;

        require_owner(&details.author_username, user)?;

        self.repo.delete(post_id).await?;

        tracing::info!(post_id = %post_id, author = %user.username, "Post deleted");

        Ok(())
    }
}
