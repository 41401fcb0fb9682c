//! Auth Gate Middleware
//!
//! Runs once per covered request: extracts the bearer credential, resolves
//! the caller's identity, and attaches an [`AuthContext`] to the request.
//! Authentication failure is non-fatal here: the request continues without
//! an identity, and operations that require one reject it themselves.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use kernel::identity::AuthContext;
use platform::bearer::extract_bearer;

use crate::application::config::AuthConfig;
use crate::application::resolve_identity::ResolveIdentityUseCase;
use crate::domain::repository::UserRepository;

/// Auth gate state
#[derive(Clone)]
pub struct AuthGateState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Middleware that resolves the caller's identity without requiring one
pub async fn auth_gate<R>(
    State(state): State<AuthGateState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let context = match extract_bearer(req.headers()) {
        Some(token) => {
            let use_case = ResolveIdentityUseCase::new(state.repo.clone(), state.config.clone());

            match use_case.resolve(&token).await {
                Ok(user) => {
                    tracing::debug!(username = %user.username, "Request authenticated");
                    AuthContext::authenticated(user)
                }
                Err(e) => {
                    // Expired/malformed token or unknown subject: continue
                    // unauthenticated; the failure surfaces downstream as
                    // 401 at operations that need an identity
                    tracing::debug!(error = %e, "Bearer token rejected");
                    AuthContext::anonymous()
                }
            }
        }
        None => AuthContext::anonymous(),
    };

    req.extensions_mut().insert(context);

    next.run(req).await
}
