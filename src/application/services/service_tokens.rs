// src/application/services/service_tokens.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::token_store::TokenStore;
use crate::domain::uid::Uid;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

pub const SERVICE_TOKEN_TTL: Duration = Duration::from_secs(15 * 60);

/// Static registry of trusted peer services, `appID -> appSecret`.
/// Populated once from configuration; read-only afterwards. Not related to
/// the persisted `apps` table of third-party OAuth applications.
pub type KnownApps = HashMap<String, String>;

/// Issues and validates the short-lived bearer tokens that gate every
/// service-to-service operation.
pub struct ServiceTokenAuthority {
    known_apps: KnownApps,
    store: Arc<dyn TokenStore>,
}

impl ServiceTokenAuthority {
    pub fn new(known_apps: KnownApps, store: Arc<dyn TokenStore>) -> Self {
        Self { known_apps, store }
    }

    /// Mints a fresh token for a registered peer. Every call produces an
    /// independent token; outstanding ones simply age out.
    pub async fn issue(&self, app_id: &str, app_secret: &str) -> ApplicationResult<String> {
        let secret = self
            .known_apps
            .get(app_id)
            .ok_or_else(|| ApplicationError::not_found("no app with this ID"))?;

        if secret != app_secret {
            return Err(ApplicationError::unauthorized("secret doesn't match"));
        }

        let token = Uid::new_random().to_string();
        self.store.set(&token, "1", SERVICE_TOKEN_TTL).await?;
        Ok(token)
    }

    /// Fails unauthenticated unless the token is currently stored. Touches
    /// nothing else, so the check cannot leak timing about later steps.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<()> {
        match self.store.get(token).await? {
            Some(_) => Ok(()),
            None => Err(ApplicationError::unauthorized("invalid service token")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::security::InMemoryTokenStore;

    fn authority() -> (ServiceTokenAuthority, Arc<InMemoryTokenStore>) {
        let store = Arc::new(InMemoryTokenStore::new());
        let known_apps = KnownApps::from([("UserAPI".to_string(), "sekrit".to_string())]);
        (
            ServiceTokenAuthority::new(known_apps, store.clone()),
            store,
        )
    }

    #[tokio::test]
    async fn issue_then_authenticate() {
        let (authority, _) = authority();
        let token = authority.issue("UserAPI", "sekrit").await.unwrap();
        authority.authenticate(&token).await.unwrap();
    }

    #[tokio::test]
    async fn unknown_app_is_not_found() {
        let (authority, _) = authority();
        let err = authority.issue("NobodyAPI", "sekrit").await.unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound(_)));
    }

    #[tokio::test]
    async fn wrong_secret_is_unauthorized() {
        let (authority, _) = authority();
        let err = authority.issue("UserAPI", "wrong").await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn unknown_token_is_unauthorized() {
        let (authority, _) = authority();
        let err = authority.authenticate("never-issued").await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn repeated_issues_are_independent() {
        let (authority, _) = authority();
        let first = authority.issue("UserAPI", "sekrit").await.unwrap();
        let second = authority.issue("UserAPI", "sekrit").await.unwrap();
        assert_ne!(first, second);
        authority.authenticate(&first).await.unwrap();
        authority.authenticate(&second).await.unwrap();
    }

    #[tokio::test]
    async fn expired_token_no_longer_authenticates() {
        let (authority, store) = authority();
        let token = authority.issue("UserAPI", "sekrit").await.unwrap();
        store.advance(SERVICE_TOKEN_TTL + Duration::from_secs(1));
        assert!(authority.authenticate(&token).await.is_err());
    }
}
