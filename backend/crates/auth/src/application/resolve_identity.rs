//! Resolve Identity Use Case
//!
//! Turns a presented bearer token into a verified [`CurrentUser`]: token
//! subject → credential-store lookup → subject re-validation against the
//! resolved user. Used by the auth gate on every covered request.

use std::sync::Arc;

use kernel::identity::CurrentUser;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Resolve identity use case
pub struct ResolveIdentityUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> ResolveIdentityUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    /// Resolve a bearer token to the caller's identity
    pub async fn resolve(&self, token: &str) -> AuthResult<CurrentUser> {
        let token_service = TokenService::new(self.config.clone());

        let subject = token_service.parse_subject(token)?;

        let user_name = UserName::new(&subject).map_err(|_| AuthError::TokenMalformed)?;

        let user = self
            .repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        // Guard against subject confusion: the token must be bound to the
        // user we just resolved
        if !token_service.validate(token, user.user_name.original()) {
            return Err(AuthError::TokenMalformed);
        }

        Ok(user.to_current_user())
    }
}
