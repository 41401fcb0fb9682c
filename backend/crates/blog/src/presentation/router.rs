//! Blog Router
//!
//! Routes for posts and comments. The caller is expected to layer the auth
//! gate over this router so mutation handlers can find an [`AuthContext`]
//! in request extensions.
//!
//! [`AuthContext`]: kernel::identity::AuthContext

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::repository::{CommentRepository, PostRepository};
use crate::infra::postgres::PgBlogRepository;
use crate::presentation::handlers::{self, BlogAppState};

/// Create the blog router with PostgreSQL repository
pub fn blog_router(repo: PgBlogRepository) -> Router {
    blog_router_generic(repo)
}

/// Create a generic blog router for any repository implementation
pub fn blog_router_generic<R>(repo: R) -> Router
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let state = BlogAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/posts",
            post(handlers::create_post::<R>).get(handlers::list_posts::<R>),
        )
        .route("/posts/search", get(handlers::search_posts::<R>))
        .route(
            "/posts/{id}",
            get(handlers::get_post::<R>)
                .put(handlers::update_post::<R>)
                .delete(handlers::delete_post::<R>),
        )
        .route(
            "/comments",
            post(handlers::create_comment::<R>).get(handlers::list_comments::<R>),
        )
        .route(
            "/comments/{id}",
            get(handlers::get_comment::<R>)
                .put(handlers::update_comment::<R>)
                .delete(handlers::delete_comment::<R>),
        )
        .with_state(state)
}
