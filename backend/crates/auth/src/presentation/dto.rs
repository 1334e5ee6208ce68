//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Public user representation
///
/// `id` is the public nanoid; the internal UUID and the password hash
/// never appear here.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.public_id.to_string(),
            name: user.display_name.to_string(),
            email: user.email.to_string(),
            created_at: user.created_at,
        }
    }
}

/// Response for successful sign-up/sign-in
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub expires_at_ms: i64,
    pub user: UserDto,
}

impl AuthResponse {
    pub fn new(user: &User, token: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            token,
            expires_at_ms: expires_at.timestamp_millis(),
            user: UserDto::from(user),
        }
    }
}

/// Session status response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    pub user: Option<UserDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{display_name::DisplayName, email::Email};

    #[test]
    fn test_user_dto_never_leaks_internals() {
        let user = User::new(
            DisplayName::new("Ann").unwrap(),
            Email::new("ann@x.com").unwrap(),
        );
        let dto = UserDto::from(&user);
        let json = serde_json::to_string(&dto).unwrap();

        assert!(json.contains("\"id\""));
        assert!(json.contains("createdAt"));
        // No internal UUID, no hash material
        assert!(!json.contains(&user.user_id.to_string()));
        assert!(!json.to_lowercase().contains("password"));
        assert!(!json.to_lowercase().contains("hash"));
    }
}
