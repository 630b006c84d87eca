// src/infrastructure/repositories/postgres_identity.rs
use super::map_sqlx;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::{identity::IdentityStore, security::PasswordHasher};
use crate::domain::{
    app::{App, AppInfo},
    uid::Uid,
    user::{User, Username},
};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

/// Postgres-backed [`IdentityStore`]. Every operation is a single statement;
/// the pool is safe to share across request handlers.
#[derive(Clone)]
pub struct PostgresIdentityStore {
    pool: PgPool,
    hasher: Arc<dyn PasswordHasher>,
}

impl PostgresIdentityStore {
    pub fn new(pool: PgPool, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { pool, hasher }
    }
}

#[derive(Debug, FromRow)]
struct UserInfoRow {
    username: String,
    is_admin: bool,
}

#[derive(Debug, FromRow)]
struct AppInfoRow {
    owner: String,
    name: String,
}

#[async_trait]
impl IdentityStore for PostgresIdentityStore {
    async fn get_user_info(&self, uid: Uid) -> ApplicationResult<User> {
        let row = sqlx::query_as::<_, UserInfoRow>(
            "SELECT username, is_admin FROM users WHERE uid = $1",
        )
        .bind(uid.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        Ok(User {
            uid,
            username: Username::new(row.username)?,
            is_admin: row.is_admin,
        })
    }

    async fn create(&self, username: &str, password: &str) -> ApplicationResult<User> {
        let uid = Uid::new_random();
        let password_hash = self.hasher.hash(password).await?;

        let result = sqlx::query(
            "INSERT INTO users (uid, username, password_hash) VALUES ($1, $2, $3)",
        )
        .bind(uid.to_string())
        .bind(username)
        .bind(&password_hash)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(ApplicationError::infrastructure("user not created"));
        }

        Ok(User {
            uid,
            username: Username::new(username)?,
            is_admin: false,
        })
    }

    async fn update(&self, uid: Uid, new_password: &str) -> ApplicationResult<()> {
        let password_hash = self.hasher.hash(new_password).await?;

        let result = sqlx::query("UPDATE users SET password_hash = $1 WHERE uid = $2")
            .bind(&password_hash)
            .bind(uid.to_string())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(ApplicationError::not_found("user not found"));
        }

        Ok(())
    }

    async fn delete(&self, uid: Uid) -> ApplicationResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE uid = $1")
            .bind(uid.to_string())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(ApplicationError::not_found("user not found"));
        }

        Ok(())
    }

    async fn check_password(&self, uid: Uid, password: &str) -> ApplicationResult<bool> {
        let password_hash = sqlx::query_scalar::<_, String>(
            "SELECT password_hash FROM users WHERE uid = $1",
        )
        .bind(uid.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        self.hasher.verify(password, &password_hash).await
    }

    async fn uid_by_username(&self, username: &str) -> ApplicationResult<Uid> {
        let uid = sqlx::query_scalar::<_, String>("SELECT uid FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        Ok(Uid::parse(&uid)?)
    }

    async fn create_app(&self, owner: Uid, name: &str) -> ApplicationResult<App> {
        let uid = Uid::new_random();
        let secret = Uid::new_random();

        let result = sqlx::query(
            "INSERT INTO apps (uid, secret, owner, name) VALUES ($1, $2, $3, $4)",
        )
        .bind(uid.to_string())
        .bind(secret.to_string())
        .bind(owner.to_string())
        .bind(name)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(ApplicationError::infrastructure("app not created"));
        }

        Ok(App {
            uid,
            secret,
            owner,
            name: name.to_string(),
        })
    }

    async fn get_app_info(&self, app_uid: Uid) -> ApplicationResult<AppInfo> {
        let row = sqlx::query_as::<_, AppInfoRow>("SELECT owner, name FROM apps WHERE uid = $1")
            .bind(app_uid.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| ApplicationError::not_found("app not found"))?;

        Ok(AppInfo {
            owner: Uid::parse(&row.owner)?,
            name: row.name,
        })
    }

    async fn is_valid_app_credentials(
        &self,
        app_uid: Uid,
        app_secret: Uid,
    ) -> ApplicationResult<bool> {
        let valid = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM apps WHERE uid = $1 AND secret = $2)",
        )
        .bind(app_uid.to_string())
        .bind(app_secret.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(valid)
    }
}
