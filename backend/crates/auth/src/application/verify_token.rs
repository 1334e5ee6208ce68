//! Verify Token Use Case
//!
//! Per-request gate: validates a presented bearer token and resolves it
//! to a live user. Terminal for the request in every failure case; no
//! retries happen here.

use std::sync::Arc;

use axum::http::HeaderMap;
use platform::bearer::extract_bearer_token;

use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Verify token use case
pub struct VerifyTokenUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> VerifyTokenUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    /// Verify a raw token string and load the subject
    ///
    /// - malformed/forged token -> `Unauthenticated`
    /// - valid signature, past expiry -> `TokenExpired`
    /// - valid token, subject deleted -> `Unauthenticated` (stale token)
    pub async fn execute(&self, token: &str) -> AuthResult<User> {
        let user_id = self.tokens.verify(token)?;

        self.repo
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::Unauthenticated)
    }

    /// Verify the `Authorization: Bearer` header of a request
    ///
    /// A missing or non-Bearer header is `Unauthenticated`.
    pub async fn from_headers(&self, headers: &HeaderMap) -> AuthResult<User> {
        let token = extract_bearer_token(headers).ok_or(AuthError::Unauthenticated)?;
        self.execute(&token).await
    }
}
