// src/application/services/users.rs
use crate::application::dto::UserInfoDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::identity::IdentityStore;
use crate::domain::{uid::Uid, user::Username};
use std::sync::Arc;

/// User account lifecycle: lookup, creation, password change, deletion.
pub struct UserService {
    identity: Arc<dyn IdentityStore>,
}

impl UserService {
    pub fn new(identity: Arc<dyn IdentityStore>) -> Self {
        Self { identity }
    }

    pub async fn get_user(&self, uid: &str) -> ApplicationResult<UserInfoDto> {
        let uid = Uid::parse(uid)?;
        let user = self.identity.get_user_info(uid).await?;
        Ok(user.into())
    }

    /// Empty usernames and passwords are rejected here, before any hashing
    /// or storage is touched.
    pub async fn create_user(
        &self,
        username: String,
        password: String,
    ) -> ApplicationResult<UserInfoDto> {
        let username = Username::new(username)?;
        if password.is_empty() {
            return Err(ApplicationError::validation("password is empty"));
        }

        let user = self.identity.create(username.as_str(), &password).await?;
        Ok(user.into())
    }

    pub async fn update_password(&self, uid: &str, new_password: &str) -> ApplicationResult<()> {
        let uid = Uid::parse(uid)?;
        self.identity.update(uid, new_password).await
    }

    /// Previously issued session tokens stay valid until their TTL runs out;
    /// deletion only removes the durable identity.
    pub async fn delete_user(&self, uid: &str) -> ApplicationResult<()> {
        let uid = Uid::parse(uid)?;
        self.identity.delete(uid).await
    }
}
