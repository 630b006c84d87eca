// src/presentation/http/controllers/requests.rs
//! One request/response message pair per operation.
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ServiceTokenRequest {
    pub app_id: String,
    pub app_secret: String,
}

#[derive(Debug, Serialize)]
pub struct ServiceTokenResponse {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateAppRequest {
    pub owner: String,
    pub name: String,
}

/// Password login, shared by access- and refresh-token issuance.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RefreshTokenResponse {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct IntrospectRequest {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct IntrospectResponse {
    pub uid: String,
}

#[derive(Debug, Deserialize)]
pub struct RotateTokenRequest {
    pub refresh_token: String,
}

#[derive(Debug, Deserialize)]
pub struct OAuthCodeRequest {
    pub username: String,
    pub password: String,
    pub app_uid: String,
}

#[derive(Debug, Serialize)]
pub struct OAuthCodeResponse {
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct OAuthExchangeRequest {
    pub app_uid: String,
    pub app_secret: String,
    pub code: String,
}
