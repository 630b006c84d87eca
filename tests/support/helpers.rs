// tests/support/helpers.rs
use crate::support::mocks::InMemoryIdentityStore;
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use identity_core::application::ports::{identity::IdentityStore, token_store::TokenStore};
use identity_core::application::services::{ApplicationServices, KnownApps};
use identity_core::infrastructure::security::InMemoryTokenStore;
use identity_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt as _;

pub const TEST_APP_ID: &str = "UserAPI";
pub const TEST_APP_SECRET: &str = "fzFKf3g6QeIdqbP7";

/// Router plus direct handles to the token stores so tests can steer time.
pub struct TestContext {
    pub router: Router,
    pub service_tokens: Arc<InMemoryTokenStore>,
    pub access_tokens: Arc<InMemoryTokenStore>,
    pub refresh_tokens: Arc<InMemoryTokenStore>,
    pub oauth_codes: Arc<InMemoryTokenStore>,
}

impl TestContext {
    pub fn new() -> Self {
        let identity: Arc<dyn IdentityStore> = Arc::new(InMemoryIdentityStore::new());
        let known_apps =
            KnownApps::from([(TEST_APP_ID.to_string(), TEST_APP_SECRET.to_string())]);

        let service_tokens = Arc::new(InMemoryTokenStore::new());
        let access_tokens = Arc::new(InMemoryTokenStore::new());
        let refresh_tokens = Arc::new(InMemoryTokenStore::new());
        let oauth_codes = Arc::new(InMemoryTokenStore::new());

        let services = Arc::new(ApplicationServices::new(
            identity,
            known_apps,
            Arc::clone(&service_tokens) as Arc<dyn TokenStore>,
            Arc::clone(&access_tokens) as Arc<dyn TokenStore>,
            Arc::clone(&refresh_tokens) as Arc<dyn TokenStore>,
            Arc::clone(&oauth_codes) as Arc<dyn TokenStore>,
        ));

        let router = build_router(HttpState { services });

        Self {
            router,
            service_tokens,
            access_tokens,
            refresh_tokens,
            oauth_codes,
        }
    }

    /// Age every namespace at once. Callers should mint a fresh service
    /// token afterwards, exactly as a real peer would.
    pub fn advance(&self, elapsed: Duration) {
        self.service_tokens.advance(elapsed);
        self.access_tokens.advance(elapsed);
        self.refresh_tokens.advance(elapsed);
        self.oauth_codes.advance(elapsed);
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        bearer: Option<&str>,
        payload: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = bearer {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match payload {
            Some(value) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    /// Trades the well-known test peer credentials for a service token.
    pub async fn service_token(&self) -> String {
        let (status, body) = self
            .request(
                Method::POST,
                "/api/v1/service-tokens",
                None,
                Some(json!({ "app_id": TEST_APP_ID, "app_secret": TEST_APP_SECRET })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "service token issuance: {body}");
        body["token"].as_str().unwrap().to_string()
    }

    /// Creates a user and returns its UID.
    pub async fn create_user(&self, token: &str, username: &str, password: &str) -> String {
        let (status, body) = self
            .request(
                Method::POST,
                "/api/v1/users",
                Some(token),
                Some(json!({ "username": username, "password": password })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create user: {body}");
        body["uid"].as_str().unwrap().to_string()
    }
}
