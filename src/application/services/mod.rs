// src/application/services/mod.rs
mod apps;
mod service_tokens;
mod sessions;
mod users;

pub use apps::AppService;
pub use service_tokens::{KnownApps, SERVICE_TOKEN_TTL, ServiceTokenAuthority};
pub use sessions::{ACCESS_TOKEN_TTL, OAUTH_CODE_TTL, REFRESH_TOKEN_TTL, SessionService};
pub use users::UserService;

use crate::application::ports::{identity::IdentityStore, token_store::TokenStore};
use std::sync::Arc;

/// Shared handles for every request handler. The identity store and the four
/// token stores are the only process-wide mutable state; the known-apps
/// registry is frozen inside [`ServiceTokenAuthority`] at construction.
pub struct ApplicationServices {
    pub service_tokens: ServiceTokenAuthority,
    pub users: UserService,
    pub apps: AppService,
    pub sessions: SessionService,
}

impl ApplicationServices {
    pub fn new(
        identity: Arc<dyn IdentityStore>,
        known_apps: KnownApps,
        service_token_store: Arc<dyn TokenStore>,
        access_token_store: Arc<dyn TokenStore>,
        refresh_token_store: Arc<dyn TokenStore>,
        oauth_code_store: Arc<dyn TokenStore>,
    ) -> Self {
        Self {
            service_tokens: ServiceTokenAuthority::new(known_apps, service_token_store),
            users: UserService::new(Arc::clone(&identity)),
            apps: AppService::new(Arc::clone(&identity)),
            sessions: SessionService::new(
                identity,
                access_token_store,
                refresh_token_store,
                oauth_code_store,
            ),
        }
    }
}
