// src/application/dto.rs
use crate::domain::{
    app::{App, AppInfo},
    user::User,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfoDto {
    pub uid: String,
    pub username: String,
    pub is_admin: bool,
}

impl From<User> for UserInfoDto {
    fn from(user: User) -> Self {
        Self {
            uid: user.uid.to_string(),
            username: user.username.into(),
            is_admin: user.is_admin,
        }
    }
}

/// Returned from app creation only, the single time the secret is exposed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppCredentialsDto {
    pub uid: String,
    pub secret: String,
}

impl From<App> for AppCredentialsDto {
    fn from(app: App) -> Self {
        Self {
            uid: app.uid.to_string(),
            secret: app.secret.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppInfoDto {
    pub owner: String,
    pub name: String,
}

impl From<AppInfo> for AppInfoDto {
    fn from(info: AppInfo) -> Self {
        Self {
            owner: info.owner.to_string(),
            name: info.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenDto {
    pub token: String,
    pub uid: String,
}

/// Access/refresh pair minted by refresh rotation and OAuth code redemption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTokensDto {
    pub access_token: String,
    pub refresh_token: String,
}
