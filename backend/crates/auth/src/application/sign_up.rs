//! Sign Up Use Case
//!
//! Creates a new user account and issues its first session token.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::entity::{credential::Credential, user::User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    display_name::DisplayName,
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Sign up output
pub struct SignUpOutput {
    pub user: User,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
    tokens: Arc<TokenService>,
}

impl<R> SignUpUseCase<R>
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

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        // Validate input shape
        let display_name =
            DisplayName::new(input.name).map_err(|e| AuthError::Validation(e.to_string()))?;
        let email =
            Email::new(input.email).map_err(|e| AuthError::Validation(e.message().to_string()))?;
        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        // Early duplicate check; the unique index stays authoritative under
        // concurrent sign-ups
        if self.repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        // Argon2 is deliberately expensive: keep it off the async executor
        let config = Arc::clone(&self.config);
        let password_hash = tokio::task::spawn_blocking(move || {
            UserPassword::from_raw(&raw_password, config.pepper())
        })
        .await
        .map_err(|e| AuthError::Internal(format!("Hashing task failed: {e}")))??;

        let user = User::new(display_name, email);
        let credential = Credential::new(user.user_id, password_hash);

        // Single atomic insert: a duplicate surfaces as EmailTaken and
        // leaves no partial record
        self.repo.create(&user, &credential).await?;

        let issued = self.tokens.issue(&user.user_id)?;

        tracing::info!(
            public_id = %user.public_id,
            "User signed up"
        );

        Ok(SignUpOutput {
            user,
            token: issued.token,
            expires_at: issued.expires_at,
        })
    }
}
