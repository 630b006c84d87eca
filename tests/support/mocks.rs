// tests/support/mocks.rs
//! In-memory identity store standing in for Postgres.

use async_trait::async_trait;
use identity_core::application::error::{ApplicationError, ApplicationResult};
use identity_core::application::ports::{identity::IdentityStore, security::PasswordHasher};
use identity_core::domain::{
    app::{App, AppInfo},
    uid::Uid,
    user::{User, Username},
};
use identity_core::infrastructure::security::BcryptPasswordHasher;
use std::collections::HashMap;
use std::sync::Mutex;

struct UserRecord {
    username: String,
    password_hash: String,
    is_admin: bool,
}

struct AppRecord {
    secret: Uid,
    owner: Uid,
    name: String,
}

/// Hash-map rendition of the identity store, hashing with the same bcrypt
/// hasher as production (cost 4 keeps the tests quick).
#[derive(Default)]
pub struct InMemoryIdentityStore {
    users: Mutex<HashMap<Uid, UserRecord>>,
    apps: Mutex<HashMap<Uid, AppRecord>>,
    hasher: BcryptPasswordHasher,
}

impl InMemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityStore for InMemoryIdentityStore {
    async fn get_user_info(&self, uid: Uid) -> ApplicationResult<User> {
        let users = self.users.lock().unwrap();
        let record = users
            .get(&uid)
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;
        Ok(User {
            uid,
            username: Username::new(record.username.clone())?,
            is_admin: record.is_admin,
        })
    }

    async fn create(&self, username: &str, password: &str) -> ApplicationResult<User> {
        let password_hash = self.hasher.hash(password).await?;

        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.username == username) {
            // The relational unique constraint, surfaced the same way.
            return Err(ApplicationError::infrastructure(
                "duplicate key value violates unique constraint \"users_username_key\"",
            ));
        }

        let uid = Uid::new_random();
        users.insert(
            uid,
            UserRecord {
                username: username.to_string(),
                password_hash,
                is_admin: false,
            },
        );

        Ok(User {
            uid,
            username: Username::new(username)?,
            is_admin: false,
        })
    }

    async fn update(&self, uid: Uid, new_password: &str) -> ApplicationResult<()> {
        let password_hash = self.hasher.hash(new_password).await?;

        let mut users = self.users.lock().unwrap();
        let record = users
            .get_mut(&uid)
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;
        record.password_hash = password_hash;
        Ok(())
    }

    async fn delete(&self, uid: Uid) -> ApplicationResult<()> {
        let mut users = self.users.lock().unwrap();
        if users.remove(&uid).is_none() {
            return Err(ApplicationError::not_found("user not found"));
        }
        drop(users);

        // Cascading delete of owned apps, as the schema does.
        let mut apps = self.apps.lock().unwrap();
        apps.retain(|_, app| app.owner != uid);
        Ok(())
    }

    async fn check_password(&self, uid: Uid, password: &str) -> ApplicationResult<bool> {
        let password_hash = {
            let users = self.users.lock().unwrap();
            users
                .get(&uid)
                .map(|record| record.password_hash.clone())
                .ok_or_else(|| ApplicationError::not_found("user not found"))?
        };

        self.hasher.verify(password, &password_hash).await
    }

    async fn uid_by_username(&self, username: &str) -> ApplicationResult<Uid> {
        let users = self.users.lock().unwrap();
        users
            .iter()
            .find(|(_, record)| record.username == username)
            .map(|(uid, _)| *uid)
            .ok_or_else(|| ApplicationError::not_found("user not found"))
    }

    async fn create_app(&self, owner: Uid, name: &str) -> ApplicationResult<App> {
        let uid = Uid::new_random();
        let secret = Uid::new_random();

        let mut apps = self.apps.lock().unwrap();
        apps.insert(
            uid,
            AppRecord {
                secret,
                owner,
                name: name.to_string(),
            },
        );

        Ok(App {
            uid,
            secret,
            owner,
            name: name.to_string(),
        })
    }

    async fn get_app_info(&self, app_uid: Uid) -> ApplicationResult<AppInfo> {
        let apps = self.apps.lock().unwrap();
        let record = apps
            .get(&app_uid)
            .ok_or_else(|| ApplicationError::not_found("app not found"))?;
        Ok(AppInfo {
            owner: record.owner,
            name: record.name.clone(),
        })
    }

    async fn is_valid_app_credentials(
        &self,
        app_uid: Uid,
        app_secret: Uid,
    ) -> ApplicationResult<bool> {
        let apps = self.apps.lock().unwrap();
        Ok(apps
            .get(&app_uid)
            .is_some_and(|record| record.secret == app_secret))
    }
}
