//! Unit tests for the auth crate's use-case flows
//!
//! Uses an in-memory `UserRepository` so register/login/identity flows run
//! without a database.

use std::sync::{Arc, Mutex};

use crate::application::{
    AuthConfig, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase, ResolveIdentityUseCase,
    TokenClaims, TokenService,
};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::{AuthError, AuthResult};

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Clone, Default)]
struct MemoryUserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

impl UserRepository for MemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();

        // Same conflict semantics the store's unique constraints provide
        if users
            .iter()
            .any(|u| u.user_name.canonical() == user.user_name.canonical())
        {
            return Err(AuthError::UsernameTaken);
        }
        if users.iter().any(|u| u.email.as_str() == user.email.as_str()) {
            return Err(AuthError::EmailTaken);
        }

        users.push(user.clone());
        Ok(())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.user_name.canonical() == user_name.canonical())
            .cloned())
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .any(|u| u.user_name.canonical() == user_name.canonical()))
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().any(|u| u.email.as_str() == email.as_str()))
    }
}

fn setup() -> (Arc<MemoryUserRepository>, Arc<AuthConfig>) {
    (
        Arc::new(MemoryUserRepository::default()),
        Arc::new(AuthConfig::with_random_secret()),
    )
}

fn register_input(username: &str, email: &str, password: &str) -> RegisterInput {
    RegisterInput {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

// ============================================================================
// Register
// ============================================================================

#[cfg(test)]
mod register_tests {
    use super::*;

    #[tokio::test]
    async fn test_register_issues_token_with_subject() {
        let (repo, config) = setup();
        let use_case = RegisterUseCase::new(repo, config.clone());

        let output = use_case
            .execute(register_input("john", "john@x.com", "pw"))
            .await
            .unwrap();

        assert_eq!(output.username, "john");
        assert_eq!(output.email, "john@x.com");

        // Token subject equals the registered username, and the token
        // parses until expiry
        let token_service = TokenService::new(config);
        assert_eq!(token_service.parse_subject(&output.token).unwrap(), "john");
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let (repo, config) = setup();
        let use_case = RegisterUseCase::new(repo, config);

        use_case
            .execute(register_input("john", "john@x.com", "pw"))
            .await
            .unwrap();

        // Same username, different email
        let result = use_case
            .execute(register_input("john", "other@x.com", "pw"))
            .await;
        assert!(matches!(result, Err(AuthError::UsernameTaken)));

        // Username uniqueness is case-insensitive
        let result = use_case
            .execute(register_input("John", "third@x.com", "pw"))
            .await;
        assert!(matches!(result, Err(AuthError::UsernameTaken)));
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let (repo, config) = setup();
        let use_case = RegisterUseCase::new(repo, config);

        use_case
            .execute(register_input("john", "john@x.com", "pw"))
            .await
            .unwrap();

        let result = use_case
            .execute(register_input("mary", "john@x.com", "pw"))
            .await;
        assert!(matches!(result, Err(AuthError::EmailTaken)));
    }

    #[tokio::test]
    async fn test_validation_collects_field_errors() {
        let (repo, config) = setup();
        let use_case = RegisterUseCase::new(repo, config);

        let result = use_case
            .execute(register_input("x", "not-an-email", ""))
            .await;

        match result {
            Err(AuthError::Validation(fields)) => {
                assert_eq!(fields.len(), 3);
                assert!(fields.contains_key("username"));
                assert!(fields.contains_key("email"));
                assert!(fields.contains_key("password"));
            }
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }
}

// ============================================================================
// Login
// ============================================================================

#[cfg(test)]
mod login_tests {
    use super::*;

    async fn registered(repo: Arc<MemoryUserRepository>, config: Arc<AuthConfig>) {
        RegisterUseCase::new(repo, config)
            .execute(register_input("john", "john@x.com", "pw"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_login_success() {
        let (repo, config) = setup();
        registered(repo.clone(), config.clone()).await;

        let use_case = LoginUseCase::new(repo, config.clone());
        let output = use_case
            .execute(LoginInput {
                username: "john".to_string(),
                password: "pw".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(output.username, "john");
        assert_eq!(output.email, "john@x.com");

        // Fresh token is independently valid
        let token_service = TokenService::new(config);
        assert!(token_service.validate(&output.token, "john"));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let (repo, config) = setup();
        registered(repo.clone(), config.clone()).await;

        let use_case = LoginUseCase::new(repo, config);
        let result = use_case
            .execute(LoginInput {
                username: "john".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let (repo, config) = setup();

        let use_case = LoginUseCase::new(repo, config);
        let result = use_case
            .execute(LoginInput {
                username: "nobody".to_string(),
                password: "pw".to_string(),
            })
            .await;

        // Indistinguishable from a wrong password
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_register_then_login_tokens_are_both_valid() {
        let (repo, config) = setup();

        let register_output = RegisterUseCase::new(repo.clone(), config.clone())
            .execute(register_input("john", "john@x.com", "pw"))
            .await
            .unwrap();

        let login_output = LoginUseCase::new(repo, config.clone())
            .execute(LoginInput {
                username: "john".to_string(),
                password: "pw".to_string(),
            })
            .await
            .unwrap();

        let token_service = TokenService::new(config);
        assert!(token_service.validate(&register_output.token, "john"));
        assert!(token_service.validate(&login_output.token, "john"));
    }
}

// ============================================================================
// Identity resolution (auth gate path)
// ============================================================================

#[cfg(test)]
mod resolve_identity_tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn test_resolve_registered_user() {
        let (repo, config) = setup();

        let output = RegisterUseCase::new(repo.clone(), config.clone())
            .execute(register_input("john", "john@x.com", "pw"))
            .await
            .unwrap();

        let use_case = ResolveIdentityUseCase::new(repo, config);
        let current = use_case.resolve(&output.token).await.unwrap();

        assert_eq!(current.username, "john");
        assert_eq!(current.role, "user");
    }

    #[tokio::test]
    async fn test_resolve_unknown_subject() {
        let (repo, config) = setup();

        // Validly signed token for a user that does not exist
        let token = TokenService::new(config.clone()).issue("ghost");

        let use_case = ResolveIdentityUseCase::new(repo, config);
        let result = use_case.resolve(&token).await;

        assert!(matches!(result, Err(AuthError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_resolve_expired_token() {
        let (repo, config) = setup();

        RegisterUseCase::new(repo.clone(), config.clone())
            .execute(register_input("john", "john@x.com", "pw"))
            .await
            .unwrap();

        let now = Utc::now().timestamp();
        let expired = TokenService::new(config.clone()).issue_with_claims(&TokenClaims {
            sub: "john".to_string(),
            iat: now - 200_000,
            exp: now - 100,
        });

        let use_case = ResolveIdentityUseCase::new(repo, config);
        let result = use_case.resolve(&expired).await;

        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[tokio::test]
    async fn test_resolve_malformed_token() {
        let (repo, config) = setup();

        let use_case = ResolveIdentityUseCase::new(repo, config);
        let result = use_case.resolve("not-a-token").await;

        assert!(matches!(result, Err(AuthError::TokenMalformed)));
    }
}

// ============================================================================
// Error mapping
// ============================================================================

#[cfg(test)]
mod error_tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use std::collections::BTreeMap;

    #[test]
    fn test_error_status_codes() {
        let cases: Vec<(AuthError, StatusCode)> = vec![
            (AuthError::UserNotFound, StatusCode::NOT_FOUND),
            (AuthError::UsernameTaken, StatusCode::CONFLICT),
            (AuthError::EmailTaken, StatusCode::CONFLICT),
            (AuthError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AuthError::TokenExpired, StatusCode::UNAUTHORIZED),
            (AuthError::TokenMalformed, StatusCode::UNAUTHORIZED),
            (
                AuthError::Validation(BTreeMap::new()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AuthError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[test]
    fn test_validation_error_carries_fields() {
        let mut fields = BTreeMap::new();
        fields.insert("username".to_string(), "too short".to_string());

        let app_err = AuthError::Validation(fields).to_app_error();
        assert_eq!(app_err.fields().unwrap().len(), 1);
    }

    #[test]
    fn test_internal_errors_do_not_leak_details() {
        let app_err = AuthError::Internal("secret connection string".into()).to_app_error();
        assert!(!app_err.message().contains("secret"));
    }
}
