//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_auth;

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let tokens = Arc::new(TokenService::new(&config));
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
        tokens,
    };

    Router::new()
        // Protected routes first: route_layer only wraps what precedes it
        .route("/me", get(handlers::current_user))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth::<R>,
        ))
        .route("/sign-up", post(handlers::sign_up::<R>))
        .route("/sign-in", post(handlers::sign_in::<R>))
        .route("/log-out", post(handlers::log_out))
        .route("/status", get(handlers::session_status::<R>))
        .with_state(state)
}
