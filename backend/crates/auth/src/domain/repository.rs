//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{credential::Credential, user::User};
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::AuthResult;

/// User repository trait
///
/// The store guarantees atomic insert with duplicate detection: `create`
/// persists profile and credential as one operation and fails with
/// `AuthError::EmailTaken` when the email is already registered, leaving
/// no partial record behind.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user with credentials (atomic)
    async fn create(&self, user: &User, credential: &Credential) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user and credentials by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<(User, Credential)>>;

    /// Check if email is already registered
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;
}
