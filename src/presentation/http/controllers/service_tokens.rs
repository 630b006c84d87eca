// src/presentation/http/controllers/service_tokens.rs
use crate::presentation::http::controllers::requests::{ServiceTokenRequest, ServiceTokenResponse};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

/// The one operation open to unauthenticated peers: trading registry
/// credentials for a short-lived service API token.
pub async fn issue(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ServiceTokenRequest>,
) -> HttpResult<Json<ServiceTokenResponse>> {
    state
        .services
        .service_tokens
        .issue(&payload.app_id, &payload.app_secret)
        .await
        .into_http()
        .map(|token| Json(ServiceTokenResponse { token }))
}
