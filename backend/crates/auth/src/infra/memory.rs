//! In-Memory Repository Implementation
//!
//! HashMap-backed store for tests and local development. Mirrors the
//! Postgres repository's contract, including `EmailTaken` on duplicate
//! insert.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entity::{credential::Credential, user::User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::{AuthError, AuthResult};

#[derive(Clone)]
struct StoredUser {
    user: User,
    credential: Credential,
}

/// In-memory auth repository
#[derive(Clone, Default)]
pub struct MemoryAuthRepository {
    users: Arc<RwLock<HashMap<Uuid, StoredUser>>>,
}

impl MemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users (test helper)
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// True when no users are stored
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    /// Remove a user entirely (test helper for stale-token scenarios)
    pub async fn remove(&self, user_id: &UserId) -> bool {
        self.users.write().await.remove(user_id.as_uuid()).is_some()
    }
}

impl UserRepository for MemoryAuthRepository {
    async fn create(&self, user: &User, credential: &Credential) -> AuthResult<()> {
        let mut users = self.users.write().await;

        // Single writer holds the lock: check-then-insert is atomic here,
        // like the unique index is for Postgres
        if users.values().any(|s| s.user.email == user.email) {
            return Err(AuthError::EmailTaken);
        }

        users.insert(
            user.user_id.into_uuid(),
            StoredUser {
                user: user.clone(),
                credential: credential.clone(),
            },
        );

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(user_id.as_uuid()).map(|s| s.user.clone()))
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<(User, Credential)>> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|s| &s.user.email == email)
            .map(|s| (s.user.clone(), s.credential.clone())))
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let users = self.users.read().await;
        Ok(users.values().any(|s| &s.user.email == email))
    }
}
