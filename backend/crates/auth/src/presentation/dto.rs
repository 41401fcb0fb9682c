//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// ============================================================================
// Shared response
// ============================================================================

/// Response for both register and login
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Bearer token for subsequent requests
    pub token: String,
    pub username: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_deserialization() {
        let json = r#"{"username":"john","email":"john@x.com","password":"pw"}"#;
        let request: RegisterRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.username, "john");
        assert_eq!(request.email, "john@x.com");
        assert_eq!(request.password, "pw");
    }

    #[test]
    fn test_login_request_deserialization() {
        let json = r#"{"username":"john","password":"pw"}"#;
        let request: LoginRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.username, "john");
        assert_eq!(request.password, "pw");
    }

    #[test]
    fn test_auth_response_serialization() {
        let response = AuthResponse {
            token: "abc.def".to_string(),
            username: "john".to_string(),
            email: "john@x.com".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""token":"abc.def""#));
        assert!(json.contains(r#""username":"john""#));
        assert!(json.contains(r#""email":"john@x.com""#));
    }
}
