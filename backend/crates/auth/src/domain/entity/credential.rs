//! Credential Entity
//!
//! Sensitive authentication data, kept apart from the User profile so
//! the hash can never leak through a profile serialization.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{user_id::UserId, user_password::UserPassword};

/// Credential entity
#[derive(Debug, Clone)]
pub struct Credential {
    /// Reference to User
    pub user_id: UserId,
    /// Argon2id password hash (PHC string)
    pub password_hash: UserPassword,
    /// Last password change
    pub password_updated_at: DateTime<Utc>,
}

impl Credential {
    /// Create credentials for a new user
    pub fn new(user_id: UserId, password_hash: UserPassword) -> Self {
        Self {
            user_id,
            password_hash,
            password_updated_at: Utc::now(),
        }
    }

    /// Replace the password hash
    pub fn set_password(&mut self, password_hash: UserPassword) {
        self.password_hash = password_hash;
        self.password_updated_at = Utc::now();
    }
}
