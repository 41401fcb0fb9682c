//! Request Identity
//!
//! Identity resolved once per request by the auth gate and carried through
//! handlers and use cases as an explicit value. Never ambient or
//! thread-local state, so ownership checks stay testable in isolation.

use uuid::Uuid;

/// Authenticated caller resolved from a bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    /// Internal user identifier
    pub user_id: Uuid,
    /// Username, as registered (the token subject)
    pub username: String,
    /// Role code ("user", "admin")
    pub role: String,
}

/// Per-request authentication context
///
/// The auth gate inserts one of these into request extensions for every
/// request it covers. `user` is `None` when no valid bearer credential was
/// presented; the gate never rejects by itself. Operations that require an
/// identity reject the anonymous case themselves.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    pub user: Option<CurrentUser>,
}

impl AuthContext {
    /// Context for a request with a verified identity
    pub fn authenticated(user: CurrentUser) -> Self {
        Self { user: Some(user) }
    }

    /// Context for a request without an established identity
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    /// The verified caller, if any
    pub fn user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
