//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{CommentDetails, PostDetails};
use crate::domain::pagination::{PageRequest, Paged};

// ============================================================================
// Requests
// ============================================================================

/// Request body for POST /posts and PUT /posts/{id}
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    pub title: String,
    pub content: String,
}

/// Request body for POST /comments and PUT /comments/{id}
///
/// `postId` is required by the schema on update too, but only the content
/// is applied there; comments cannot be re-parented.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    pub content: String,
    pub post_id: Uuid,
}

/// Query parameters for GET /posts
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

/// Query parameters for GET /posts/search
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    pub keyword: String,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

/// Query parameters for GET /comments
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentListParams {
    pub post_id: Uuid,
}

// ============================================================================
// Views
// ============================================================================

/// Post response view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Computed at read time against the comment store
    pub comment_count: i64,
}

impl From<PostDetails> for PostView {
    fn from(details: PostDetails) -> Self {
        Self {
            id: details.post.post_id.into_uuid(),
            title: details.post.title,
            content: details.post.content,
            author_username: details.author_username,
            created_at: details.post.created_at,
            updated_at: details.post.updated_at,
            comment_count: details.comment_count,
        }
    }
}

/// Comment response view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: Uuid,
    pub content: String,
    pub post_id: Uuid,
    pub author_username: String,
    pub created_at: DateTime<Utc>,
}

impl From<CommentDetails> for CommentView {
    fn from(details: CommentDetails) -> Self {
        Self {
            id: details.comment.comment_id.into_uuid(),
            content: details.comment.content,
            post_id: details.comment.post_id.into_uuid(),
            author_username: details.author_username,
            created_at: details.comment.created_at,
        }
    }
}

/// Paged response envelope
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
}

impl PageResponse<PostView> {
    /// Build the envelope from a repository page
    pub fn from_paged(paged: Paged<PostDetails>, request: &PageRequest) -> Self {
        let total = paged.total;
        let mapped = paged.map(PostView::from);

        Self {
            content: mapped.items,
            page: request.page(),
            size: request.size(),
            total_elements: total,
            total_pages: request.total_pages(total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_request_deserialization() {
        let json = r#"{"title":"Hello","content":"World"}"#;
        let request: PostRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.title, "Hello");
        assert_eq!(request.content, "World");
    }

    #[test]
    fn test_comment_request_deserialization() {
        let json = r#"{"content":"First!","postId":"00000000-0000-0000-0000-000000000000"}"#;
        let request: CommentRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.content, "First!");
        assert_eq!(request.post_id, Uuid::nil());
    }

    #[test]
    fn test_post_view_serialization_is_camel_case() {
        let view = PostView {
            id: Uuid::nil(),
            title: "Hello".to_string(),
            content: "World".to_string(),
            author_username: "john".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            comment_count: 3,
        };

        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains("authorUsername"));
        assert!(json.contains("createdAt"));
        assert!(json.contains("updatedAt"));
        assert!(json.contains(r#""commentCount":3"#));
    }

    #[test]
    fn test_comment_view_serialization_is_camel_case() {
        let view = CommentView {
            id: Uuid::nil(),
            content: "First!".to_string(),
            post_id: Uuid::nil(),
            author_username: "mary".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains("postId"));
        assert!(json.contains("authorUsername"));
    }

    #[test]
    fn test_page_response_envelope() {
        let request = PageRequest::new(Some(1), Some(10));
        let paged: Paged<PostDetails> = Paged {
            items: Vec::new(),
            total: 25,
        };

        let response = PageResponse::from_paged(paged, &request);
        assert_eq!(response.page, 1);
        assert_eq!(response.size, 10);
        assert_eq!(response.total_elements, 25);
        assert_eq!(response.total_pages, 3);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("totalElements"));
        assert!(json.contains("totalPages"));
    }
}
