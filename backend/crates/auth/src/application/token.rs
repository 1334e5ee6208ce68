//! Session Token Service
//!
//! Issues and verifies stateless session tokens (JWT, HS256). A token is
//! self-contained: subject id, issue time and expiry, signed with the
//! process-wide secret. Verification needs no database round-trip; the
//! caller is responsible for resolving the subject to a live user.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// JWT claims carried by a session token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's internal UUID
    pub sub: String,
    /// Issued at (Unix seconds)
    pub iat: i64,
    /// Expiry (Unix seconds)
    pub exp: i64,
}

/// A freshly issued token with its expiry
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Issues and verifies session tokens
///
/// Holds the derived signing keys; construct once at startup from
/// [`AuthConfig`] and share behind an `Arc`.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: std::time::Duration,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(&config.token_secret),
            decoding_key: DecodingKey::from_secret(&config.token_secret),
            ttl: config.token_ttl,
        }
    }

    /// Issue a signed token for the given user
    pub fn issue(&self, user_id: &UserId) -> AuthResult<IssuedToken> {
        let now = Utc::now();
        let ttl = chrono::Duration::from_std(self.ttl)
            .map_err(|e| AuthError::Internal(format!("Invalid token TTL: {e}")))?;
        let expires_at = now + ttl;

        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Token encoding failed: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Verify a token and resolve its subject
    ///
    /// The signature is checked before the expiry claim, so a tampered
    /// token is always `Unauthenticated`, never `TokenExpired`.
    pub fn verify(&self, token: &str) -> AuthResult<UserId> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact: a token is invalid the second it expires
        validation.leeway = 0;

        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::Unauthenticated,
            })?;

        let uuid = Uuid::parse_str(&data.claims.sub).map_err(|_| AuthError::Unauthenticated)?;

        Ok(UserId::from_uuid(uuid))
    }
}
