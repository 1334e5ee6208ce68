//! End-to-end auth flow tests
//!
//! Drives the real router (handlers + middleware + use cases) over the
//! in-memory repository, the same way the HTTP layer would.

use std::time::Duration;

use auth::application::token::Claims;
use auth::domain::repository::UserRepository;
use auth::domain::value_object::email::Email;
use auth::router::auth_router_generic;
use auth::{AuthConfig, MemoryAuthRepository};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

const TEST_SECRET: [u8; 32] = [42u8; 32];

fn test_router() -> (Router, MemoryAuthRepository) {
    let repo = MemoryAuthRepository::new();
    let config = AuthConfig::new(TEST_SECRET.to_vec(), Duration::from_secs(3600));
    let router = auth_router_generic(repo.clone(), config);
    (router, repo)
}

async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

async fn sign_up(router: &Router, name: &str, email: &str, password: &str) -> (StatusCode, Value) {
    send(
        router,
        "POST",
        "/sign-up",
        Some(json!({ "name": name, "email": email, "password": password })),
        None,
    )
    .await
}

async fn sign_in(router: &Router, email: &str, password: &str) -> (StatusCode, Value) {
    send(
        router,
        "POST",
        "/sign-in",
        Some(json!({ "email": email, "password": password })),
        None,
    )
    .await
}

fn expired_token_signed_with_test_secret() -> String {
    let now = chrono::Utc::now();
    let claims = Claims {
        sub: uuid::Uuid::new_v4().to_string(),
        iat: now.timestamp() - 7200,
        exp: now.timestamp() - 3600,
    };
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(&TEST_SECRET),
    )
    .unwrap()
}

#[tokio::test]
async fn sign_up_issues_verifiable_token() {
    let (router, _repo) = test_router();

    let (status, body) = sign_up(&router, "Ann", "Ann@X.com", "secret1").await;
    assert_eq!(status, StatusCode::CREATED);

    // Email is stored lowercased; the hash never leaves the store
    assert_eq!(body["user"]["email"], "ann@x.com");
    assert_eq!(body["user"]["name"], "Ann");
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("passwordHash").is_none());

    // The issued token resolves back to the same user
    let token = body["token"].as_str().unwrap();
    let (status, me) = send(&router, "GET", "/me", None, Some(token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["id"], body["user"]["id"]);
    assert_eq!(me["email"], "ann@x.com");
}

#[tokio::test]
async fn duplicate_sign_up_is_email_taken() {
    let (router, repo) = test_router();

    let (status, _) = sign_up(&router, "Ann", "ann@x.com", "secret1").await;
    assert_eq!(status, StatusCode::CREATED);

    // Same address in a different spelling is still a duplicate
    let (status, body) = sign_up(&router, "Impostor", "ANN@X.COM", "other-pass").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["detail"], "Email already registered");

    // The existing record is untouched
    assert_eq!(repo.len().await, 1);
    let (status, _) = sign_in(&router, "ann@x.com", "secret1").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn sign_in_failures_are_indistinguishable() {
    let (router, _repo) = test_router();

    let (status, _) = sign_up(&router, "Ann", "ann@x.com", "secret1").await;
    assert_eq!(status, StatusCode::CREATED);

    let (wrong_pw_status, wrong_pw_body) = sign_in(&router, "ann@x.com", "wrong-pass").await;
    let (no_user_status, no_user_body) = sign_in(&router, "ghost@x.com", "whatever1").await;

    assert_eq!(wrong_pw_status, StatusCode::UNAUTHORIZED);
    assert_eq!(no_user_status, StatusCode::UNAUTHORIZED);

    // Identical error shape: no account enumeration through the response
    assert_eq!(wrong_pw_body, no_user_body);
}

#[tokio::test]
async fn sign_in_with_correct_password_issues_fresh_token() {
    let (router, _repo) = test_router();

    let (_, signup_body) = sign_up(&router, "Ann", "ann@x.com", "secret1").await;

    let (status, body) = sign_in(&router, "ann@x.com", "secret1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], signup_body["user"]["id"]);

    let token = body["token"].as_str().unwrap();
    let (status, me) = send(&router, "GET", "/me", None, Some(token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["id"], signup_body["user"]["id"]);
}

#[tokio::test]
async fn invalid_sign_up_input_is_rejected() {
    let (router, repo) = test_router();

    // Too-short password
    let (status, _) = sign_up(&router, "Ann", "ann@x.com", "abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Too-short name
    let (status, _) = sign_up(&router, "A", "ann@x.com", "secret1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Not an email
    let (status, _) = sign_up(&router, "Ann", "not-an-email", "secret1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Nothing was persisted
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn me_requires_a_valid_token() {
    let (router, _repo) = test_router();

    // No Authorization header
    let (status, body) = send(&router, "GET", "/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Authentication required");

    // Garbage token
    let (status, body) = send(&router, "GET", "/me", None, Some("garbage")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Authentication required");
}

#[tokio::test]
async fn expired_token_is_reported_distinctly() {
    let (router, _repo) = test_router();

    let expired = expired_token_signed_with_test_secret();
    let (status, body) = send(&router, "GET", "/me", None, Some(&expired)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Session token expired");
}

#[tokio::test]
async fn tampered_token_is_never_reported_expired() {
    let (router, _repo) = test_router();

    // Expired claims under a corrupted signature: the signature check wins
    let mut tampered = expired_token_signed_with_test_secret();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let (status, body) = send(&router, "GET", "/me", None, Some(&tampered)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Authentication required");
}

#[tokio::test]
async fn stale_token_for_deleted_account_is_rejected() {
    let (router, repo) = test_router();

    let (_, body) = sign_up(&router, "Ann", "ann@x.com", "secret1").await;
    let token = body["token"].as_str().unwrap().to_string();

    // Delete the account out from under the token
    let email = Email::new("ann@x.com").unwrap();
    let (user, _) = repo.find_by_email(&email).await.unwrap().unwrap();
    assert!(repo.remove(&user.user_id).await);

    let (status, body) = send(&router, "GET", "/me", None, Some(&token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Authentication required");
}

#[tokio::test]
async fn log_out_is_a_client_side_discard() {
    let (router, _repo) = test_router();

    let (_, body) = sign_up(&router, "Ann", "ann@x.com", "secret1").await;
    let token = body["token"].as_str().unwrap().to_string();

    let (status, _) = send(&router, "POST", "/log-out", None, Some(&token)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Stateless design: the token stays valid until expiry. Known
    // limitation, asserted so a future revocation list changes this test.
    let (status, _) = send(&router, "GET", "/me", None, Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn check_auth_reports_status_without_rejecting() {
    use auth::TokenService;
    use auth::domain::entity::{credential::Credential, user::User};
    use auth::domain::value_object::{
        display_name::DisplayName,
        user_password::{RawPassword, UserPassword},
    };
    use auth::handlers::AuthAppState;
    use auth::middleware::{AuthStatus, check_auth};
    use std::sync::Arc;

    let repo = MemoryAuthRepository::new();
    let config = AuthConfig::new(TEST_SECRET.to_vec(), Duration::from_secs(3600));
    let tokens = Arc::new(TokenService::new(&config));

    let user = User::new(
        DisplayName::new("Ann").unwrap(),
        Email::new("ann@x.com").unwrap(),
    );
    let raw = RawPassword::new("secret1".to_string()).unwrap();
    let credential = Credential::new(user.user_id, UserPassword::from_raw(&raw, None).unwrap());
    repo.create(&user, &credential).await.unwrap();
    let token = tokens.issue(&user.user_id).unwrap().token;

    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
        tokens,
    };

    async fn probe(axum::Extension(status): axum::Extension<AuthStatus>) -> String {
        status.is_authenticated.to_string()
    }

    let router = Router::new()
        .route("/probe", axum::routing::get(probe))
        .layer(axum::middleware::from_fn_with_state(
            state,
            check_auth::<MemoryAuthRepository>,
        ));

    let (status, _) = send(&router, "GET", "/probe", None, None).await;
    assert_eq!(status, StatusCode::OK);

    let request = Request::builder()
        .method("GET")
        .uri("/probe")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"true");
}

#[tokio::test]
async fn status_reports_both_states_without_rejecting() {
    let (router, _repo) = test_router();

    let (status, body) = send(&router, "GET", "/status", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["authenticated"], false);
    assert!(body["user"].is_null());

    let (_, signup) = sign_up(&router, "Ann", "ann@x.com", "secret1").await;
    let token = signup["token"].as_str().unwrap();

    let (status, body) = send(&router, "GET", "/status", None, Some(token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["authenticated"], true);
    assert_eq!(body["user"]["email"], "ann@x.com");

    // A bad token downgrades to unauthenticated instead of erroring
    let (status, body) = send(&router, "GET", "/status", None, Some("garbage")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["authenticated"], false);
}
