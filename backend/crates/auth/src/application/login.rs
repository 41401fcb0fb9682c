//! Login Use Case
//!
//! Authenticates credentials and mints a fresh token. Every login issues an
//! independent token; earlier tokens stay valid until their own expiry.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    pub token: String,
    pub username: String,
    pub email: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // Unknown usernames, invalid usernames and wrong passwords are
        // indistinguishable to the caller
        let user_name =
            UserName::new(input.username).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&raw_password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = TokenService::new(self.config.clone()).issue(user.user_name.original());

        tracing::info!(username = %user.user_name, "User logged in");

        Ok(LoginOutput {
            token,
            username: user.user_name.original().to_string(),
            email: user.email.as_str().to_string(),
        })
    }
}
