//! User Entity
//!
//! Core user profile entity containing non-sensitive user data.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    display_name::DisplayName, email::Email, public_id::PublicId, user_id::UserId,
};

/// User entity
///
/// Contains the user's public profile. The password hash lives in the
/// Credential entity and never travels with this type.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Public-facing nanoid identifier (URL-safe)
    pub public_id: PublicId,
    /// Display name
    pub display_name: DisplayName,
    /// Email address (unique, case-insensitive, stored lowercased)
    pub email: Email,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(display_name: DisplayName, email: Email) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            public_id: PublicId::new(),
            display_name,
            email,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_fresh_identifiers() {
        let a = User::new(
            DisplayName::new("Ann").unwrap(),
            Email::new("ann@x.com").unwrap(),
        );
        let b = User::new(
            DisplayName::new("Ann").unwrap(),
            Email::new("ann@y.com").unwrap(),
        );

        assert_ne!(a.user_id, b.user_id);
        assert_ne!(a.public_id, b.public_id);
        assert_eq!(a.created_at, a.updated_at);
    }
}
