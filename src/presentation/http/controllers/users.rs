// src/presentation/http/controllers/users.rs
use crate::application::dto::UserInfoDto;
use crate::presentation::http::controllers::requests::{CreateUserRequest, UpdateUserRequest};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ServiceAuthenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};

pub async fn get_user(
    Extension(state): Extension<HttpState>,
    _auth: ServiceAuthenticated,
    Path(uid): Path<String>,
) -> HttpResult<Json<UserInfoDto>> {
    state.services.users.get_user(&uid).await.into_http().map(Json)
}

pub async fn create_user(
    Extension(state): Extension<HttpState>,
    _auth: ServiceAuthenticated,
    Json(payload): Json<CreateUserRequest>,
) -> HttpResult<Json<UserInfoDto>> {
    state
        .services
        .users
        .create_user(payload.username, payload.password)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_user(
    Extension(state): Extension<HttpState>,
    _auth: ServiceAuthenticated,
    Path(uid): Path<String>,
    Json(payload): Json<UpdateUserRequest>,
) -> HttpResult<StatusCode> {
    state
        .services
        .users
        .update_password(&uid, &payload.password)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_user(
    Extension(state): Extension<HttpState>,
    _auth: ServiceAuthenticated,
    Path(uid): Path<String>,
) -> HttpResult<StatusCode> {
    state.services.users.delete_user(&uid).await.into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
