// src/application/services/apps.rs
use crate::application::dto::{AppCredentialsDto, AppInfoDto};
use crate::application::error::ApplicationResult;
use crate::application::ports::identity::IdentityStore;
use crate::domain::uid::Uid;
use std::sync::Arc;

/// Registration and lookup of third-party OAuth applications.
pub struct AppService {
    identity: Arc<dyn IdentityStore>,
}

impl AppService {
    pub fn new(identity: Arc<dyn IdentityStore>) -> Self {
        Self { identity }
    }

    pub async fn create_app(&self, owner: &str, name: &str) -> ApplicationResult<AppCredentialsDto> {
        let owner = Uid::parse(owner)?;
        let app = self.identity.create_app(owner, name).await?;
        Ok(app.into())
    }

    pub async fn get_app(&self, uid: &str) -> ApplicationResult<AppInfoDto> {
        let uid = Uid::parse(uid)?;
        let info = self.identity.get_app_info(uid).await?;
        Ok(info.into())
    }
}
