// src/domain/app.rs
use crate::domain::uid::Uid;

/// Third-party application registered for the OAuth code flow.
/// Immutable once created; the secret is returned exactly once.
#[derive(Debug, Clone)]
pub struct App {
    pub uid: Uid,
    pub secret: Uid,
    pub owner: Uid,
    pub name: String,
}

/// Public subset of [`App`]: what anyone may learn about an application.
#[derive(Debug, Clone)]
pub struct AppInfo {
    pub owner: Uid,
    pub name: String,
}
