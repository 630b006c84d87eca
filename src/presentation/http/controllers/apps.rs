// src/presentation/http/controllers/apps.rs
use crate::application::dto::{AppCredentialsDto, AppInfoDto};
use crate::presentation::http::controllers::requests::CreateAppRequest;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ServiceAuthenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

pub async fn create_app(
    Extension(state): Extension<HttpState>,
    _auth: ServiceAuthenticated,
    Json(payload): Json<CreateAppRequest>,
) -> HttpResult<Json<AppCredentialsDto>> {
    state
        .services
        .apps
        .create_app(&payload.owner, &payload.name)
        .await
        .into_http()
        .map(Json)
}

/// Public app information; applications hand their UID to end users, who
/// may look the app up before delegating.
pub async fn get_app(
    Extension(state): Extension<HttpState>,
    Path(uid): Path<String>,
) -> HttpResult<Json<AppInfoDto>> {
    state.services.apps.get_app(&uid).await.into_http().map(Json)
}
