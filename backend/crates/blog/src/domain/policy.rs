//! Authorization Policy
//!
//! Pure ownership check applied before every Post/Comment mutation. Read
//! operations never call it. No I/O, no side effects; the identity value
//! is passed in explicitly so the check is testable in isolation.

use kernel::identity::CurrentUser;

use crate::error::{BlogError, BlogResult};

/// Only the resource's author may mutate or delete it
pub fn require_owner(resource_author: &str, requesting_user: &CurrentUser) -> BlogResult<()> {
    if resource_author != requesting_user.username {
        return Err(BlogError::Forbidden);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn user(name: &str) -> CurrentUser {
        CurrentUser {
            user_id: Uuid::new_v4(),
            username: name.to_string(),
            role: "user".to_string(),
        }
    }

    #[test]
    fn test_owner_allowed() {
        assert!(require_owner("john", &user("john")).is_ok());
    }

    #[test]
    fn test_non_owner_forbidden() {
        assert!(matches!(
            require_owner("john", &user("mary")),
            Err(BlogError::Forbidden)
        ));
    }

    #[test]
    fn test_comparison_is_exact() {
        // Stored usernames are compared verbatim; the credential store
        // guarantees case-insensitive uniqueness, so two distinct users
        // can never differ by case alone
        assert!(matches!(
            require_owner("John", &user("john")),
            Err(BlogError::Forbidden)
        ));
    }
}
