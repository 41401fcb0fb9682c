//! User Entity
//!
//! Credential-store record: identity fields plus the password hash.
//! Username, email and role are fixed at registration.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use kernel::identity::CurrentUser;

use crate::domain::value_object::{
    email::Email, user_name::UserName, user_password::UserPassword, user_role::UserRole,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// User name (unique, for login and display)
    pub user_name: UserName,
    /// Email address (unique)
    pub email: Email,
    /// Argon2id password hash
    pub password_hash: UserPassword,
    /// Role (User, Admin); fixed at creation
    pub user_role: UserRole,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with the default role
    pub fn new(user_name: UserName, email: Email, password_hash: UserPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            user_name,
            email,
            password_hash,
            user_role: UserRole::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Project into the request-scoped identity value
    pub fn to_current_user(&self) -> CurrentUser {
        CurrentUser {
            user_id: self.user_id.into_uuid(),
            username: self.user_name.original().to_string(),
            role: self.user_role.code().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::RawPassword;

    fn sample_user() -> User {
        let raw = RawPassword::new("pw").unwrap();
        User::new(
            UserName::new("john").unwrap(),
            Email::new("john@x.com").unwrap(),
            UserPassword::from_raw(&raw, None).unwrap(),
        )
    }

    #[test]
    fn test_new_user_defaults() {
        let user = sample_user();
        assert_eq!(user.user_role, UserRole::User);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_to_current_user() {
        let user = sample_user();
        let current = user.to_current_user();
        assert_eq!(current.user_id, user.user_id.into_uuid());
        assert_eq!(current.username, "john");
        assert_eq!(current.role, "user");
    }
}
