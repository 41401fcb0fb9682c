//! Query Posts Use Case
//!
//! Public reads: by id, paginated listing, keyword search. No
//! authorization check on any of these.

use std::sync::Arc;

use kernel::id::PostId;

use crate::domain::entities::PostDetails;
use crate::domain::pagination::{PageRequest, Paged};
use crate::domain::repository::PostRepository;
use crate::error::{BlogError, BlogResult};

/// Query posts use case
pub struct QueryPostsUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> QueryPostsUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Get a single post by id
    pub async fn get_by_id(&self, post_id: &PostId) -> BlogResult<PostDetails> {
        self.repo
            .find_by_id(post_id)
            .await?
            .ok_or(BlogError::PostNotFound)
    }

    /// One page of posts, newest first
    pub async fn list(&self, page: &PageRequest) -> BlogResult<Paged<PostDetails>> {
        self.repo.list(page).await
    }

    /// One page of posts matching the keyword, newest first
    pub async fn search(
        &self,
        keyword: &str,
        page: &PageRequest,
    ) -> BlogResult<Paged<PostDetails>> {
        self.repo.search(keyword, page).await
    }
}
