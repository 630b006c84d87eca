// src/application/ports/identity.rs
use crate::application::ApplicationResult;
use crate::domain::{
    app::{App, AppInfo},
    uid::Uid,
    user::User,
};
use async_trait::async_trait;

/// Durable storage for users and third-party applications.
///
/// This is the service's single persistence seam: the production
/// implementation is Postgres-backed, tests substitute an in-memory one.
/// Password handling stays behind this trait: `create`, `update` and
/// `check_password` hash and verify internally, so plaintext passwords go no
/// further and hashes never come out.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Fails not-found when no user has this UID.
    async fn get_user_info(&self, uid: Uid) -> ApplicationResult<User>;

    /// Generates a fresh UID, hashes the password, inserts. Username
    /// uniqueness is enforced by the relational unique constraint.
    async fn create(&self, username: &str, password: &str) -> ApplicationResult<User>;

    /// Rehashes and writes the password; not-found when no row was updated.
    async fn update(&self, uid: Uid, new_password: &str) -> ApplicationResult<()>;

    /// Not-found when no row was deleted. Apps owned by the user are
    /// removed with it (cascading delete).
    async fn delete(&self, uid: Uid) -> ApplicationResult<()>;

    /// Fails not-found for an unknown UID; otherwise reports whether the
    /// password matches the stored hash.
    async fn check_password(&self, uid: Uid, password: &str) -> ApplicationResult<bool>;

    async fn uid_by_username(&self, username: &str) -> ApplicationResult<Uid>;

    /// Generates a fresh app UID and secret for `owner`.
    async fn create_app(&self, owner: Uid, name: &str) -> ApplicationResult<App>;

    async fn get_app_info(&self, app_uid: Uid) -> ApplicationResult<AppInfo>;

    /// Existence check for the `(uid, secret)` pair.
    async fn is_valid_app_credentials(
        &self,
        app_uid: Uid,
        app_secret: Uid,
    ) -> ApplicationResult<bool>;
}
