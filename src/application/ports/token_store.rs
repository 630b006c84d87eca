// src/application/ports/token_store.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use std::time::Duration;

/// Expiring key/value storage backing one token namespace.
///
/// Each token kind (service API token, access token, refresh token, OAuth
/// code) gets its own store instance, so a value valid in one namespace can
/// never validate in another. Rotation policy is the caller's business; the
/// store only knows keys, values, and TTLs.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Overwrites any existing value and its TTL.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> ApplicationResult<()>;

    async fn get(&self, key: &str) -> ApplicationResult<Option<String>>;

    /// Slides the expiration of `key`; no-op when the key is absent.
    async fn expire(&self, key: &str, ttl: Duration) -> ApplicationResult<()>;

    /// Idempotent: deleting an absent key succeeds.
    async fn del(&self, key: &str) -> ApplicationResult<()>;
}
