//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, middleware, router
//!
//! ## Features
//! - User sign-up/sign-in with email + password
//! - Stateless bearer sessions (signed, expiring JWTs)
//! - Per-request token verification middleware
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, fresh salt per hash
//! - Tokens signed with a process-wide HS256 secret loaded at startup
//! - Expired tokens are rejected distinctly from forged ones so clients
//!   can re-authenticate instead of treating the failure as an attack
//! - Sign-in errors never reveal whether an email is registered

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{AuthConfig, ConfigError};
pub use application::token::TokenService;
pub use error::{AuthError, AuthResult};
pub use infra::memory::MemoryAuthRepository;
pub use infra::postgres::PgAuthRepository;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgAuthRepository as AuthStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
