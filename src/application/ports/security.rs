// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// One-way password hashing. Hashing is CPU-bound; implementations must not
/// hold shared locks while computing.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;

    /// Returns whether `password` matches `expected_hash`. A mismatch is
    /// `Ok(false)`; only an unreadable hash or executor failure is an error.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool>;
}
