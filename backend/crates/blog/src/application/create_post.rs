//! Create Post Use Case

use std::sync::Arc;

use kernel::id::UserId;
use kernel::identity::CurrentUser;

use crate::domain::entities::{Post, PostDetails};
use crate::domain::repository::PostRepository;
use crate::error::{BlogError, BlogResult};

/// Create post input
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
}

/// Create post use case
pub struct CreatePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> CreatePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        input: CreatePostInput,
        user: &CurrentUser,
    ) -> BlogResult<PostDetails> {
        Post::validate_fields(&input.title, &input.content).map_err(BlogError::Validation)?;

        let post = Post::new(
            input.title,
            input.content,
            UserId::from_uuid(user.user_id),
        );

        self.repo.create(&post).await?;

        tracing::info!(
            post_id = %post.post_id,
            author = %user.username,
            "Post created"
        );

        // A fresh post has no comments yet
        Ok(PostDetails {
            post,
            author_username: user.username.clone(),
            comment_count: 0,
        })
    }
}
