//! Application Configuration
//!
//! Configuration for the Auth application layer. Loaded once at startup;
//! a missing or unusable signing secret must abort the process before it
//! accepts traffic, it is never a per-request error.

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Default session token TTL (30 days)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(30 * 24 * 3600);

/// Minimum accepted signing secret length in bytes (HS256 key)
pub const MIN_SECRET_LENGTH: usize = 32;

/// Environment variable holding the base64-encoded signing secret
const ENV_TOKEN_SECRET: &str = "AUTH_TOKEN_SECRET";

/// Environment variable overriding the token TTL (seconds)
const ENV_TOKEN_TTL_SECS: &str = "AUTH_TOKEN_TTL_SECS";

/// Environment variable holding the optional base64-encoded pepper
const ENV_PASSWORD_PEPPER: &str = "AUTH_PASSWORD_PEPPER";

/// Startup configuration errors (fatal, never surfaced per-request)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{ENV_TOKEN_SECRET} is not set")]
    MissingSecret,

    #[error("{0} is not valid base64")]
    InvalidEncoding(&'static str),

    #[error("Signing secret must be at least {MIN_SECRET_LENGTH} bytes (got {0})")]
    SecretTooShort(usize),

    #[error("{ENV_TOKEN_TTL_SECS} is not a valid number of seconds: {0}")]
    InvalidTtl(String),
}

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Symmetric signing secret for session tokens (HS256)
    pub token_secret: Vec<u8>,
    /// Session token TTL
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    /// Create a config with an explicit secret and TTL
    pub fn new(token_secret: Vec<u8>, token_ttl: Duration) -> Self {
        Self {
            token_secret,
            token_ttl,
            password_pepper: None,
        }
    }

    /// Create config with a random signing secret (for development)
    pub fn with_random_secret() -> Self {
        Self::new(platform::crypto::random_bytes(32), DEFAULT_TOKEN_TTL)
    }

    /// Create config for development
    ///
    /// Tokens signed with this config die with the process.
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Load configuration from the environment
    ///
    /// Reads `AUTH_TOKEN_SECRET` (base64, required, >= 32 bytes decoded),
    /// `AUTH_TOKEN_TTL_SECS` (optional) and `AUTH_PASSWORD_PEPPER`
    /// (optional base64).
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_b64 = env::var(ENV_TOKEN_SECRET).map_err(|_| ConfigError::MissingSecret)?;
        let token_secret = platform::crypto::from_base64(secret_b64.trim())
            .map_err(|_| ConfigError::InvalidEncoding(ENV_TOKEN_SECRET))?;

        if token_secret.len() < MIN_SECRET_LENGTH {
            return Err(ConfigError::SecretTooShort(token_secret.len()));
        }

        let token_ttl = match env::var(ENV_TOKEN_TTL_SECS) {
            Ok(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidTtl(raw.clone()))?;
                if secs == 0 {
                    return Err(ConfigError::InvalidTtl(raw));
                }
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_TOKEN_TTL,
        };

        let password_pepper = match env::var(ENV_PASSWORD_PEPPER) {
            Ok(raw) => Some(
                platform::crypto::from_base64(raw.trim())
                    .map_err(|_| ConfigError::InvalidEncoding(ENV_PASSWORD_PEPPER))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            token_secret,
            token_ttl,
            password_pepper,
        })
    }

    /// Get token TTL in seconds
    pub fn token_ttl_secs(&self) -> u64 {
        self.token_ttl.as_secs()
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
