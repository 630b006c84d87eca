// src/infrastructure/security/memory_token_store.rs
use crate::application::error::ApplicationResult;
use crate::application::ports::token_store::TokenStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct Entry {
    value: String,
    expires_at: Instant,
}

/// In-memory [`TokenStore`] with real TTL semantics.
///
/// Backs tests and single-process setups. [`advance`](Self::advance) moves a
/// logical clock forward so expiration behavior can be tested without
/// sleeping.
#[derive(Default)]
pub struct InMemoryTokenStore {
    inner: Mutex<HashMap<String, Entry>>,
    skew: Mutex<Duration>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Test hook: move the store's notion of "now" forward by `elapsed`.
    pub fn advance(&self, elapsed: Duration) {
        let mut skew = self.skew.lock().unwrap();
        *skew += elapsed;
    }

    fn now(&self) -> Instant {
        Instant::now() + *self.skew.lock().unwrap()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> ApplicationResult<()> {
        let expires_at = self.now() + ttl;
        let mut guard = self.inner.lock().unwrap();
        guard.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> ApplicationResult<Option<String>> {
        let now = self.now();
        let mut guard = self.inner.lock().unwrap();
        match guard.get(key) {
            Some(entry) if entry.expires_at > now => Ok(Some(entry.value.clone())),
            Some(_) => {
                guard.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn expire(&self, key: &str, ttl: Duration) -> ApplicationResult<()> {
        let expires_at = self.now() + ttl;
        let mut guard = self.inner.lock().unwrap();
        if let Some(entry) = guard.get_mut(key) {
            entry.expires_at = expires_at;
        }
        Ok(())
    }

    async fn del(&self, key: &str) -> ApplicationResult<()> {
        let mut guard = self.inner.lock().unwrap();
        guard.remove(key);
        Ok(())
    }
}
