//! Token Service
//!
//! Issues and verifies self-contained signed bearer tokens. A token is
//! `base64url(claims JSON) + "." + base64url(HMAC-SHA256 signature)`.
//! Subject and expiry travel inside the token, so verification is
//! stateless: no session table, no revocation list.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Claims embedded in a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the username asserting the caller's identity
    pub sub: String,
    /// Issued-at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

impl TokenClaims {
    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.exp
    }
}

/// Token issue/verify service
pub struct TokenService {
    config: Arc<AuthConfig>,
}

impl TokenService {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Issue a signed token for the given subject
    pub fn issue(&self, subject: &str) -> String {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: subject.to_string(),
            iat: now,
            exp: now + self.config.token_ttl_secs(),
        };

        self.encode(&claims)
    }

    /// Parse and verify a token, returning its subject
    ///
    /// Fails with [`AuthError::TokenMalformed`] on structural or signature
    /// problems and [`AuthError::TokenExpired`] when the embedded expiry
    /// has passed, even if the signature is valid.
    pub fn parse_subject(&self, token: &str) -> AuthResult<String> {
        self.parse_claims(token).map(|claims| claims.sub)
    }

    /// True iff the token is well-formed, unexpired, and carries the
    /// expected subject
    pub fn validate(&self, token: &str, expected_subject: &str) -> bool {
        self.parse_claims(token)
            .map(|claims| claims.sub == expected_subject)
            .unwrap_or(false)
    }

    /// Parse and verify a token's claims
    pub fn parse_claims(&self, token: &str) -> AuthResult<TokenClaims> {
        use base64::Engine;

        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 2 {
            return Err(AuthError::TokenMalformed);
        }

        let payload_b64 = parts[0];
        let signature_b64 = parts[1];

        // Verify signature before trusting any payload content
        let signature = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| AuthError::TokenMalformed)?;

        self.verify_signature(payload_b64.as_bytes(), &signature)?;

        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| AuthError::TokenMalformed)?;

        let claims: TokenClaims =
            serde_json::from_slice(&payload).map_err(|_| AuthError::TokenMalformed)?;

        if claims.is_expired(Utc::now().timestamp()) {
            return Err(AuthError::TokenExpired);
        }

        Ok(claims)
    }

    /// Encode and sign claims
    fn encode(&self, claims: &TokenClaims) -> String {
        use base64::Engine;
        use hmac::{Hmac, Mac};
        use sha2::Sha256;

        let payload = serde_json::to_vec(claims).expect("claims are always serializable");
        let payload_b64 = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(payload);

        let mut mac = Hmac::<Sha256>::new_from_slice(&self.config.token_secret)
            .expect("HMAC can take key of any size");
        mac.update(payload_b64.as_bytes());
        let signature = mac.finalize().into_bytes();

        format!(
            "{}.{}",
            payload_b64,
            base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(signature)
        )
    }

    fn verify_signature(&self, data: &[u8], signature: &[u8]) -> AuthResult<()> {
        use hmac::{Hmac, Mac};
        use sha2::Sha256;

        let mut mac = Hmac::<Sha256>::new_from_slice(&self.config.token_secret)
            .expect("HMAC can take key of any size");
        mac.update(data);

        mac.verify_slice(signature)
            .map_err(|_| AuthError::TokenMalformed)
    }

    /// Sign arbitrary claims (expired-token tests)
    #[cfg(test)]
    pub fn issue_with_claims(&self, claims: &TokenClaims) -> String {
        self.encode(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(Arc::new(AuthConfig::with_random_secret()))
    }

    #[test]
    fn test_issue_and_parse_subject() {
        let service = service();
        let token = service.issue("john");

        assert_eq!(service.parse_subject(&token).unwrap(), "john");
    }

    #[test]
    fn test_claims_carry_ttl() {
        let service = service();
        let token = service.issue("john");

        let claims = service.parse_claims(&token).unwrap();
        assert_eq!(claims.sub, "john");
        assert_eq!(claims.exp - claims.iat, 86_400);
    }

    #[test]
    fn test_expired_token_with_valid_signature() {
        let service = service();
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: "john".to_string(),
            iat: now - 100_000,
            exp: now - 10,
        };

        let token = service.issue_with_claims(&claims);
        assert!(matches!(
            service.parse_subject(&token),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn test_malformed_tokens() {
        let service = service();

        for bad in ["", "no-dot", "a.b.c", "!!!.###", "onlypayload."] {
            assert!(
                matches!(service.parse_subject(bad), Err(AuthError::TokenMalformed)),
                "expected malformed for {bad:?}"
            );
        }
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let service = service();
        let token = service.issue("john");

        let (_, signature) = token.split_once('.').unwrap();
        let forged_claims = TokenClaims {
            sub: "mary".to_string(),
            iat: 0,
            exp: i64::MAX,
        };
        let forged_payload = {
            use base64::Engine;
            base64::engine::general_purpose::URL_SAFE_NO_PAD
                .encode(serde_json::to_vec(&forged_claims).unwrap())
        };

        let forged = format!("{}.{}", forged_payload, signature);
        assert!(matches!(
            service.parse_subject(&forged),
            Err(AuthError::TokenMalformed)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = service();
        let verifier = service(); // different random secret

        let token = issuer.issue("john");
        assert!(matches!(
            verifier.parse_subject(&token),
            Err(AuthError::TokenMalformed)
        ));
    }

    #[test]
    fn test_validate_subject_binding() {
        let service = service();
        let token = service.issue("john");

        assert!(service.validate(&token, "john"));
        assert!(!service.validate(&token, "mary"));
        assert!(!service.validate("garbage", "john"));
    }
}
