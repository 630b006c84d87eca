// src/application/services/sessions.rs
use crate::application::dto::{AccessTokenDto, SessionTokensDto};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::{identity::IdentityStore, token_store::TokenStore};
use crate::domain::uid::Uid;
use std::sync::Arc;
use std::time::Duration;

pub const ACCESS_TOKEN_TTL: Duration = Duration::from_secs(15 * 60);
pub const REFRESH_TOKEN_TTL: Duration = Duration::from_secs(14 * 24 * 60 * 60);
pub const OAUTH_CODE_TTL: Duration = Duration::from_secs(60);

/// User session tokens and the OAuth delegation flow.
///
/// Access tokens slide their expiration on every successful validation;
/// refresh tokens and OAuth codes are single-use. Rotation deletes the old
/// refresh token before minting replacements, so a failure mid-rotation
/// loses the session rather than leaving two refresh tokens live.
pub struct SessionService {
    identity: Arc<dyn IdentityStore>,
    access_tokens: Arc<dyn TokenStore>,
    refresh_tokens: Arc<dyn TokenStore>,
    oauth_codes: Arc<dyn TokenStore>,
}

impl SessionService {
    pub fn new(
        identity: Arc<dyn IdentityStore>,
        access_tokens: Arc<dyn TokenStore>,
        refresh_tokens: Arc<dyn TokenStore>,
        oauth_codes: Arc<dyn TokenStore>,
    ) -> Self {
        Self {
            identity,
            access_tokens,
            refresh_tokens,
            oauth_codes,
        }
    }

    pub async fn issue_access_token(
        &self,
        username: &str,
        password: &str,
    ) -> ApplicationResult<AccessTokenDto> {
        let uid = self.authenticate_user(username, password).await?;

        let token = Uid::new_random().to_string();
        self.access_tokens
            .set(&token, &uid.to_string(), ACCESS_TOKEN_TTL)
            .await?;

        Ok(AccessTokenDto {
            token,
            uid: uid.to_string(),
        })
    }

    pub async fn issue_refresh_token(
        &self,
        username: &str,
        password: &str,
    ) -> ApplicationResult<String> {
        let uid = self.authenticate_user(username, password).await?;

        let token = Uid::new_random().to_string();
        self.refresh_tokens
            .set(&token, &uid.to_string(), REFRESH_TOKEN_TTL)
            .await?;

        Ok(token)
    }

    /// Validates an access token and slides its expiration back out to the
    /// full window. The stored value must itself parse as a UID.
    pub async fn user_by_access_token(&self, token: &str) -> ApplicationResult<String> {
        let value = self
            .access_tokens
            .get(token)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid user token"))?;

        let uid = Uid::parse(&value)
            .map_err(|_| ApplicationError::unauthorized("invalid user token"))?;

        self.access_tokens.expire(token, ACCESS_TOKEN_TTL).await?;

        Ok(uid.to_string())
    }

    /// Redeems a refresh token for a fresh access/refresh pair.
    ///
    /// The old token is deleted before anything is minted: a crash in
    /// between loses the session, which beats a window with two live
    /// refresh tokens.
    pub async fn rotate_refresh_token(&self, token: &str) -> ApplicationResult<SessionTokensDto> {
        let value = self
            .refresh_tokens
            .get(token)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid user token"))?;

        let uid = Uid::parse(&value)
            .map_err(|_| ApplicationError::unauthorized("invalid user token"))?;

        self.refresh_tokens.del(token).await?;

        self.mint_session(&uid.to_string()).await
    }

    /// Issues a 60-second single-use code binding `app_uid` to the user.
    ///
    /// `app_uid` is not checked against the apps table here: issuance is
    /// authenticated by the user's password, and redemption verifies the
    /// app's credentials.
    pub async fn issue_oauth_code(
        &self,
        username: &str,
        password: &str,
        app_uid: &str,
    ) -> ApplicationResult<String> {
        let uid = self.authenticate_user(username, password).await?;

        let code = Uid::new_random().to_string();
        // Key is the raw app UID + code concatenation, no separator.
        self.oauth_codes
            .set(
                &format!("{app_uid}{code}"),
                &uid.to_string(),
                OAUTH_CODE_TTL,
            )
            .await?;

        Ok(code)
    }

    pub async fn redeem_oauth_code(
        &self,
        app_uid: &str,
        app_secret: &str,
        code: &str,
    ) -> ApplicationResult<SessionTokensDto> {
        let parsed_uid = Uid::parse(app_uid)?;
        let parsed_secret = Uid::parse(app_secret)?;

        let valid = self
            .identity
            .is_valid_app_credentials(parsed_uid, parsed_secret)
            .await?;
        if !valid {
            return Err(ApplicationError::unauthorized("wrong appid appsecret pair"));
        }

        let key = format!("{app_uid}{code}");
        let uid = self
            .oauth_codes
            .get(&key)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid user token"))?;

        // Single-use: the delete is idempotent, so a concurrently expired
        // code does not turn into an error here.
        self.oauth_codes.del(&key).await?;

        self.mint_session(&uid).await
    }

    async fn mint_session(&self, uid: &str) -> ApplicationResult<SessionTokensDto> {
        let refresh_token = Uid::new_random().to_string();
        self.refresh_tokens
            .set(&refresh_token, uid, REFRESH_TOKEN_TTL)
            .await?;

        let access_token = Uid::new_random().to_string();
        self.access_tokens
            .set(&access_token, uid, ACCESS_TOKEN_TTL)
            .await?;

        Ok(SessionTokensDto {
            access_token,
            refresh_token,
        })
    }

    /// Shared password-login chain: resolve the username, then verify the
    /// password. Store errors are hard failures, never treated as a mere
    /// mismatch.
    async fn authenticate_user(&self, username: &str, password: &str) -> ApplicationResult<Uid> {
        let uid = self.identity.uid_by_username(username).await?;

        let same_password = self.identity.check_password(uid, password).await?;
        if !same_password {
            return Err(ApplicationError::unauthorized("wrong password"));
        }

        Ok(uid)
    }
}
