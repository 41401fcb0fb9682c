//! HTTP Handlers
//!
//! The auth gate runs in front of this router and attaches an
//! [`AuthContext`] to every request. Public reads ignore it; mutations
//! require it and answer 401 when no identity was established.

use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;
use uuid::Uuid;

use kernel::id::{CommentId, PostId};
use kernel::identity::{AuthContext, CurrentUser};

use crate::application::{
    CreateCommentInput, CreateCommentUseCase, CreatePostInput, CreatePostUseCase,
    DeleteCommentUseCase, DeletePostUseCase, QueryCommentsUseCase, QueryPostsUseCase,
    UpdateCommentInput, UpdateCommentUseCase, UpdatePostInput, UpdatePostUseCase,
};
use crate::domain::pagination::PageRequest;
use crate::domain::repository::{CommentRepository, PostRepository};
use crate::error::{BlogError, BlogResult};
use crate::presentation::dto::{
    CommentListParams, CommentRequest, CommentView, ListParams, PageResponse, PostRequest,
    PostView, SearchParams,
};

/// Shared state for blog handlers
#[derive(Clone)]
pub struct BlogAppState<R>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// Reject requests that reached a mutation without an identity
fn require_user(ctx: &AuthContext) -> BlogResult<&CurrentUser> {
    ctx.user().ok_or(BlogError::Unauthorized)
}

// ============================================================================
// Posts
// ============================================================================

/// POST /posts
pub async fn create_post<R>(
    State(state): State<BlogAppState<R>>,
    Extension(ctx): Extension<AuthContext>,
    Json(req): Json<PostRequest>,
) -> BlogResult<impl IntoResponse>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let user = require_user(&ctx)?;
    let use_case = CreatePostUseCase::new(state.repo.clone());

    let input = CreatePostInput {
        title: req.title,
        content: req.content,
    };

    let details = use_case.execute(input, user).await?;

    Ok((StatusCode::CREATED, Json(PostView::from(details))))
}

/// GET /posts
pub async fn list_posts<R>(
    State(state): State<BlogAppState<R>>,
    Query(params): Query<ListParams>,
) -> BlogResult<Json<PageResponse<PostView>>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let page = PageRequest::new(params.page, params.size);
    let use_case = QueryPostsUseCase::new(state.repo.clone());

    let paged = use_case.list(&page).await?;

    Ok(Json(PageResponse::from_paged(paged, &page)))
}

/// GET /posts/search
pub async fn search_posts<R>(
    State(state): State<BlogAppState<R>>,
    Query(params): Query<SearchParams>,
) -> BlogResult<Json<PageResponse<PostView>>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let page = PageRequest::new(params.page, params.size);
    let use_case = QueryPostsUseCase::new(state.repo.clone());

    let paged = use_case.search(&params.keyword, &page).await?;

    Ok(Json(PageResponse::from_paged(paged, &page)))
}

/// GET /posts/{id}
pub async fn get_post<R>(
    State(state): State<BlogAppState<R>>,
    Path(id): Path<Uuid>,
) -> BlogResult<Json<PostView>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = QueryPostsUseCase::new(state.repo.clone());

    let details = use_case.get_by_id(&PostId::from_uuid(id)).await?;

    Ok(Json(PostView::from(details)))
}

/// PUT /posts/{id}
pub async fn update_post<R>(
    State(state): State<BlogAppState<R>>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(req): Json<PostRequest>,
) -> BlogResult<Json<PostView>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let user = require_user(&ctx)?;
    let use_case = UpdatePostUseCase::new(state.repo.clone());

    let input = UpdatePostInput {
        post_id: PostId::from_uuid(id),
        title: req.title,
        content: req.content,
    };

    let details = use_case.execute(input, user).await?;

    Ok(Json(PostView::from(details)))
}

/// DELETE /posts/{id}
pub async fn delete_post<R>(
    State(state): State<BlogAppState<R>>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> BlogResult<StatusCode>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let user = require_user(&ctx)?;
    let use_case = DeletePostUseCase::new(state.repo.clone());

    use_case.execute(&PostId::from_uuid(id), user).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Comments
// ============================================================================

/// POST /comments
pub async fn create_comment<R>(
    State(state): State<BlogAppState<R>>,
    Extension(ctx): Extension<AuthContext>,
    Json(req): Json<CommentRequest>,
) -> BlogResult<impl IntoResponse>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let user = require_user(&ctx)?;
    let use_case = CreateCommentUseCase::new(state.repo.clone(), state.repo.clone());

    let input = CreateCommentInput {
        content: req.content,
        post_id: PostId::from_uuid(req.post_id),
    };

    let details = use_case.execute(input, user).await?;

    Ok((StatusCode::CREATED, Json(CommentView::from(details))))
}

/// GET /comments?postId=
pub async fn list_comments<R>(
    State(state): State<BlogAppState<R>>,
    Query(params): Query<CommentListParams>,
) -> BlogResult<Json<Vec<CommentView>>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = QueryCommentsUseCase::new(state.repo.clone(), state.repo.clone());

    let comments = use_case
        .list_by_post(&PostId::from_uuid(params.post_id))
        .await?;

    Ok(Json(comments.into_iter().map(CommentView::from).collect()))
}

/// GET /comments/{id}
pub async fn get_comment<R>(
    State(state): State<BlogAppState<R>>,
    Path(id): Path<Uuid>,
) -> BlogResult<Json<CommentView>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let use_case = QueryCommentsUseCase::new(state.repo.clone(), state.repo.clone());

    let details = use_case.get_by_id(&CommentId::from_uuid(id)).await?;

    Ok(Json(CommentView::from(details)))
}

/// PUT /comments/{id}
pub async fn update_comment<R>(
    State(state): State<BlogAppState<R>>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(req): Json<CommentRequest>,
) -> BlogResult<Json<CommentView>>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let user = require_user(&ctx)?;
    let use_case = UpdateCommentUseCase::new(state.repo.clone());

    let input = UpdateCommentInput {
        comment_id: CommentId::from_uuid(id),
        content: req.content,
    };

    let details = use_case.execute(input, user).await?;

    Ok(Json(CommentView::from(details)))
}

/// DELETE /comments/{id}
pub async fn delete_comment<R>(
    State(state): State<BlogAppState<R>>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> BlogResult<StatusCode>
where
    R: PostRepository + CommentRepository + Clone + Send + Sync + 'static,
{
    let user = require_user(&ctx)?;
    let use_case = DeleteCommentUseCase::new(state.repo.clone());

    use_case.execute(&CommentId::from_uuid(id), user).await?;

    Ok(StatusCode::NO_CONTENT)
}
