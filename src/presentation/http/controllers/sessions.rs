// src/presentation/http/controllers/sessions.rs
use crate::application::dto::{AccessTokenDto, SessionTokensDto};
use crate::presentation::http::controllers::requests::{
    CredentialsRequest, IntrospectRequest, IntrospectResponse, RefreshTokenResponse,
    RotateTokenRequest,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ServiceAuthenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

pub async fn issue_access_token(
    Extension(state): Extension<HttpState>,
    _auth: ServiceAuthenticated,
    Json(payload): Json<CredentialsRequest>,
) -> HttpResult<Json<AccessTokenDto>> {
    state
        .services
        .sessions
        .issue_access_token(&payload.username, &payload.password)
        .await
        .into_http()
        .map(Json)
}

pub async fn issue_refresh_token(
    Extension(state): Extension<HttpState>,
    _auth: ServiceAuthenticated,
    Json(payload): Json<CredentialsRequest>,
) -> HttpResult<Json<RefreshTokenResponse>> {
    state
        .services
        .sessions
        .issue_refresh_token(&payload.username, &payload.password)
        .await
        .into_http()
        .map(|token| Json(RefreshTokenResponse { token }))
}

/// Resolves an access token to its user and slides the expiration.
pub async fn introspect(
    Extension(state): Extension<HttpState>,
    _auth: ServiceAuthenticated,
    Json(payload): Json<IntrospectRequest>,
) -> HttpResult<Json<IntrospectResponse>> {
    state
        .services
        .sessions
        .user_by_access_token(&payload.token)
        .await
        .into_http()
        .map(|uid| Json(IntrospectResponse { uid }))
}

/// Single-use refresh: the presented token is dead after this returns,
/// success or not past the lookup.
pub async fn rotate(
    Extension(state): Extension<HttpState>,
    _auth: ServiceAuthenticated,
    Json(payload): Json<RotateTokenRequest>,
) -> HttpResult<Json<SessionTokensDto>> {
    state
        .services
        .sessions
        .rotate_refresh_token(&payload.refresh_token)
        .await
        .into_http()
        .map(Json)
}
