// tests/e2e_error_statuses.rs
use axum::http::{Method, StatusCode};
use serde_json::{Value, json};

mod support;

use support::TestContext;

fn gated_operations() -> Vec<(Method, &'static str, Option<Value>)> {
    vec![
        (
            Method::GET,
            "/api/v1/users/33333333-3333-4333-8333-333333333333",
            None,
        ),
        (
            Method::POST,
            "/api/v1/users",
            Some(json!({ "username": "mallory", "password": "pw" })),
        ),
        (
            Method::PATCH,
            "/api/v1/users/33333333-3333-4333-8333-333333333333",
            Some(json!({ "password": "pw" })),
        ),
        (
            Method::DELETE,
            "/api/v1/users/33333333-3333-4333-8333-333333333333",
            None,
        ),
        (
            Method::POST,
            "/api/v1/apps",
            Some(json!({ "owner": "33333333-3333-4333-8333-333333333333", "name": "App" })),
        ),
        (
            Method::POST,
            "/api/v1/tokens/access",
            Some(json!({ "username": "mallory", "password": "pw" })),
        ),
        (
            Method::POST,
            "/api/v1/tokens/refresh",
            Some(json!({ "username": "mallory", "password": "pw" })),
        ),
        (
            Method::POST,
            "/api/v1/tokens/introspect",
            Some(json!({ "token": "t" })),
        ),
        (
            Method::POST,
            "/api/v1/tokens/rotate",
            Some(json!({ "refresh_token": "t" })),
        ),
        (
            Method::POST,
            "/api/v1/oauth/codes",
            Some(json!({ "username": "mallory", "password": "pw", "app_uid": "x" })),
        ),
        (
            Method::POST,
            "/api/v1/oauth/exchange",
            Some(json!({
                "app_uid": "33333333-3333-4333-8333-333333333333",
                "app_secret": "33333333-3333-4333-8333-333333333333",
                "code": "c",
            })),
        ),
    ]
}

#[tokio::test]
async fn every_gated_operation_rejects_missing_and_bogus_tokens() {
    let ctx = TestContext::new();

    for (method, uri, payload) in gated_operations() {
        let (status, _) = ctx
            .request(method.clone(), uri, None, payload.clone())
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri} without token");

        let (status, _) = ctx
            .request(method.clone(), uri, Some("bogus"), payload)
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri} with bogus token");
    }
}

#[tokio::test]
async fn gated_rejection_happens_before_any_effect() {
    let ctx = TestContext::new();

    let (status, _) = ctx
        .request(
            Method::POST,
            "/api/v1/users",
            Some("bogus"),
            Some(json!({ "username": "mallory", "password": "pw" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // The rejected call reached neither the identity store nor the token
    // stores: mallory was never created.
    let token = ctx.service_token().await;
    let (status, _) = ctx
        .request(
            Method::POST,
            "/api/v1/tokens/access",
            Some(&token),
            Some(json!({ "username": "mallory", "password": "pw" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_peer_and_wrong_secret() {
    let ctx = TestContext::new();

    let (status, _) = ctx
        .request(
            Method::POST,
            "/api/v1/service-tokens",
            None,
            Some(json!({ "app_id": "NobodyAPI", "app_secret": "x" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = ctx
        .request(
            Method::POST,
            "/api/v1/service-tokens",
            None,
            Some(json!({ "app_id": support::TEST_APP_ID, "app_secret": "wrong" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn health_is_open() {
    let ctx = TestContext::new();
    let (status, body) = ctx.request(Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
