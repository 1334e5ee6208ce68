//! Sign In Use Case
//!
//! Authenticates a user by email + password and issues a fresh token.
//!
//! Unknown email and wrong password produce the same `InvalidCredentials`
//! error so responses cannot be used to enumerate accounts.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    pub user: User,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
    tokens: Arc<TokenService>,
}

impl<R> SignInUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>, tokens: Arc<TokenService>) -> Self {
        Self {
            repo,
            config,
            tokens,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        // Malformed input can never match a stored account, so it maps to
        // the same error as a failed lookup
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let (user, credential) = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // Argon2 verification off the async executor
        let config = Arc::clone(&self.config);
        let password_hash = credential.password_hash.clone();
        let password_valid = tokio::task::spawn_blocking(move || {
            password_hash.verify(&raw_password, config.pepper())
        })
        .await
        .map_err(|e| AuthError::Internal(format!("Verification task failed: {e}")))?;

        if !password_valid {
            return Err(AuthError::InvalidCredentials);
        }

        let issued = self.tokens.issue(&user.user_id)?;

        tracing::info!(
            public_id = %user.public_id,
            "User signed in"
        );

        Ok(SignInOutput {
            user,
            token: issued.token,
            expires_at: issued.expires_at,
        })
    }
}
