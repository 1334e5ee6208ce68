//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::application::{
    SignInInput, SignInUseCase, SignUpInput, SignUpUseCase, VerifyTokenUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    AuthResponse, SessionStatusResponse, SignInRequest, SignUpRequest, UserDto,
};
use crate::presentation::middleware::CurrentUser;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenService>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/v1/auth/sign-up
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(
        state.repo.clone(),
        state.config.clone(),
        state.tokens.clone(),
    );

    let input = SignUpInput {
        name: req.name,
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse::new(
            &output.user,
            output.token,
            output.expires_at,
        )),
    ))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/v1/auth/sign-in
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignInRequest>,
) -> AuthResult<Json<AuthResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.config.clone(),
        state.tokens.clone(),
    );

    let input = SignInInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(AuthResponse::new(
        &output.user,
        output.token,
        output.expires_at,
    )))
}

// ============================================================================
// Log Out
// ============================================================================

/// POST /api/v1/auth/log-out
///
/// Sessions are stateless bearer tokens: there is nothing to invalidate
/// server-side. The client discards its token; the server acknowledges.
pub async fn log_out() -> StatusCode {
    StatusCode::NO_CONTENT
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/v1/auth/status
///
/// Reports whether the request carries a valid session. Never 401: the
/// unauthenticated case is a normal answer here.
pub async fn session_status<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> Json<SessionStatusResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = VerifyTokenUseCase::new(state.repo.clone(), state.tokens.clone());

    match use_case.from_headers(&headers).await {
        Ok(user) => Json(SessionStatusResponse {
            authenticated: true,
            user: Some(UserDto::from(&user)),
        }),
        Err(_) => Json(SessionStatusResponse {
            authenticated: false,
            user: None,
        }),
    }
}

// ============================================================================
// Current User
// ============================================================================

/// GET /api/v1/auth/me (requires authentication)
pub async fn current_user(
    axum::Extension(CurrentUser(user)): axum::Extension<CurrentUser>,
) -> Json<UserDto> {
    Json(UserDto::from(&user))
}
