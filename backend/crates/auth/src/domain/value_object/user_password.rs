//! User Password Value Object
//!
//! パスワードの検証・ハッシュ化・照合を担当する値オブジェクト。
//! 実際の暗号処理は platform クレートの Argon2id 実装に委譲する。

use std::fmt;

use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};

/// Validated clear-text password, pending hashing
///
/// Zeroized on drop via the underlying [`ClearTextPassword`].
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Validate a raw password (policy checks, NFKC normalization)
    pub fn new(raw: impl Into<String>) -> Result<Self, PasswordPolicyError> {
        ClearTextPassword::new(raw.into()).map(Self)
    }

    fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

/// Stored password hash (Argon2id PHC string)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a validated raw password
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> Result<Self, PasswordHashError> {
        raw.inner().hash(pepper).map(Self)
    }

    /// Wrap a hash loaded from the database
    ///
    /// A malformed stored value is tolerated; it simply never verifies.
    pub fn from_db(hash: impl Into<String>) -> Self {
        Self(HashedPassword::from_db(hash))
    }

    /// Verify a raw password against this hash
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }

    /// PHC string for storage
    pub fn as_str(&self) -> &str {
        self.0.as_phc_string()
    }
}
