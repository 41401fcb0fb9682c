//! Register Use Case
//!
//! Creates a new user account and issues its first token.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Register output
pub struct RegisterOutput {
    pub token: String,
    pub username: String,
    pub email: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Field validation: collect every failure before reporting
        let mut field_errors = BTreeMap::new();

        let user_name = match UserName::new(input.username) {
            Ok(name) => Some(name),
            Err(e) => {
                field_errors.insert("username".to_string(), e.to_string());
                None
            }
        };

        let email = match Email::new(input.email) {
            Ok(email) => Some(email),
            Err(e) => {
                field_errors.insert("email".to_string(), e.message().to_string());
                None
            }
        };

        let raw_password = match RawPassword::new(input.password) {
            Ok(password) => Some(password),
            Err(e) => {
                field_errors.insert("password".to_string(), e.to_string());
                None
            }
        };

        let (user_name, email, raw_password) = match (user_name, email, raw_password) {
            (Some(n), Some(e), Some(p)) => (n, e, p),
            _ => return Err(AuthError::Validation(field_errors)),
        };

        // Uniqueness pre-checks; the store's unique constraints remain the
        // backstop for concurrent registrations
        if self.repo.exists_by_user_name(&user_name).await? {
            return Err(AuthError::UsernameTaken);
        }
        if self.repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        // Hash and persist
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(user_name, email, password_hash);
        self.repo.create(&user).await?;

        // First token for the fresh account
        let token = TokenService::new(self.config.clone()).issue(user.user_name.original());

        tracing::info!(username = %user.user_name, "User registered");

        Ok(RegisterOutput {
            token,
            username: user.user_name.original().to_string(),
            email: user.email.as_str().to_string(),
        })
    }
}
