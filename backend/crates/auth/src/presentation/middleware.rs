//! Auth Middleware
//!
//! Per-request token verification for protected routes. Every protected
//! route passes through [`require_auth`] before its handler runs.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::application::VerifyTokenUseCase;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::presentation::handlers::AuthAppState;

/// The verified identity, attached to request extensions on success
#[derive(Clone)]
pub struct CurrentUser(pub User);

/// Authentication status stored by [`check_auth`]
#[derive(Clone, Copy)]
pub struct AuthStatus {
    pub is_authenticated: bool,
}

/// Middleware that requires a valid bearer token
///
/// On success the resolved [`CurrentUser`] is inserted into the request
/// extensions; otherwise the request is rejected with the verifier's
/// error (401, `TokenExpired` kept distinct from `Unauthenticated`).
pub async fn require_auth<R>(
    State(state): State<AuthAppState<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = VerifyTokenUseCase::new(state.repo.clone(), state.tokens.clone());

    match use_case.from_headers(req.headers()).await {
        Ok(user) => {
            req.extensions_mut().insert(CurrentUser(user));
            Ok(next.run(req).await)
        }
        Err(e) => Err(e.into_response()),
    }
}

/// Middleware that checks the bearer token but doesn't require it
///
/// Sets [`AuthStatus`] for handlers that render both states.
pub async fn check_auth<R>(
    State(state): State<AuthAppState<R>>,
    mut req: Request,
    next: Next,
) -> Response
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = VerifyTokenUseCase::new(state.repo.clone(), state.tokens.clone());

    match use_case.from_headers(req.headers()).await {
        Ok(user) => {
            req.extensions_mut()
                .insert(AuthStatus { is_authenticated: true });
            req.extensions_mut().insert(CurrentUser(user));
        }
        Err(_) => {
            req.extensions_mut()
                .insert(AuthStatus { is_authenticated: false });
        }
    }

    next.run(req).await
}
