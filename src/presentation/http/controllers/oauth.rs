// src/presentation/http/controllers/oauth.rs
use crate::application::dto::SessionTokensDto;
use crate::presentation::http::controllers::requests::{
    OAuthCodeRequest, OAuthCodeResponse, OAuthExchangeRequest,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ServiceAuthenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

/// A user trades their password for a 60-second code naming the app.
pub async fn issue_code(
    Extension(state): Extension<HttpState>,
    _auth: ServiceAuthenticated,
    Json(payload): Json<OAuthCodeRequest>,
) -> HttpResult<Json<OAuthCodeResponse>> {
    state
        .services
        .sessions
        .issue_oauth_code(&payload.username, &payload.password, &payload.app_uid)
        .await
        .into_http()
        .map(|code| Json(OAuthCodeResponse { code }))
}

/// The app trades the code plus its own credentials for a session.
pub async fn exchange_code(
    Extension(state): Extension<HttpState>,
    _auth: ServiceAuthenticated,
    Json(payload): Json<OAuthExchangeRequest>,
) -> HttpResult<Json<SessionTokensDto>> {
    state
        .services
        .sessions
        .redeem_oauth_code(&payload.app_uid, &payload.app_secret, &payload.code)
        .await
        .into_http()
        .map(Json)
}
