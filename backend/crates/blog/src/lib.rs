//! Blog Backend Module (Posts + Comments)
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, ownership policy, pagination, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Authorization Model
//! - Reads are public; no identity required
//! - Mutations require an identity from the auth gate and pass the
//!   ownership policy (author-only edit/delete)
//! - Comment counts are computed at read time, never cached

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{BlogError, BlogResult};
pub use infra::postgres::PgBlogRepository;
pub use presentation::router::blog_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::pagination::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgBlogRepository as BlogStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
