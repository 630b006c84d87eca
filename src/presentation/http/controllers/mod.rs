// src/presentation/http/controllers/mod.rs
pub mod apps;
pub mod oauth;
pub mod requests;
pub mod service_tokens;
pub mod sessions;
pub mod users;
