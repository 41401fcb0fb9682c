//! Update Post Use Case
//!
//! Fetch → ownership check → mutate → persist.

use std::sync::Arc;

use kernel::id::PostId;
use kernel::identity::CurrentUser;

use crate::domain::entities::{Post, PostDetails};
use crate::domain::policy::require_owner;
use crate::domain::repository::PostRepository;
use crate::error::{BlogError, BlogResult};

/// Update post input
pub struct UpdatePostInput {
    pub post_id: PostId,
    pub title: String,
    pub content: String,
}

/// Update post use case
pub struct UpdatePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> UpdatePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        input: UpdatePostInput,
        user: &CurrentUser,
    ) -> BlogResult<PostDetails> {
        Post::validate_fields(&input.title, &input.content).map_err(BlogError::Validation)?;

        let details = self
            .repo
            .find_by_id(&input.post_id)
            .await?
            .ok_or(BlogError::PostNotFound)?;

        require_owner(&details.author_username, user)?;

        let mut post = details.post;
        post.apply_edit(input.title, input.content);

        self.repo.update(&post).await?;

        tracing::info!(post_id = %post.post_id, author = %user.username, "Post updated");

        Ok(PostDetails {
            post,
            author_username: details.author_username,
            comment_count: details.comment_count,
        })
    }
}
