// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{apps, oauth, service_tokens, sessions, users};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    routing::{get, post},
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .merge(system_routes())
        .merge(service_token_routes())
        .merge(user_routes())
        .merge(app_routes())
        .merge(token_routes())
        .merge(oauth_routes())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

fn system_routes() -> Router {
    Router::new().route("/health", get(health))
}

fn service_token_routes() -> Router {
    Router::new().route("/api/v1/service-tokens", post(service_tokens::issue))
}

fn user_routes() -> Router {
    Router::new()
        .route("/api/v1/users", post(users::create_user))
        .route(
            "/api/v1/users/{uid}",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
}

fn app_routes() -> Router {
    Router::new()
        .route("/api/v1/apps", post(apps::create_app))
        .route("/api/v1/apps/{uid}", get(apps::get_app))
}

fn token_routes() -> Router {
    Router::new()
        .route("/api/v1/tokens/access", post(sessions::issue_access_token))
        .route("/api/v1/tokens/refresh", post(sessions::issue_refresh_token))
        .route("/api/v1/tokens/introspect", post(sessions::introspect))
        .route("/api/v1/tokens/rotate", post(sessions::rotate))
}

fn oauth_routes() -> Router {
    Router::new()
        .route("/api/v1/oauth/codes", post(oauth::issue_code))
        .route("/api/v1/oauth/exchange", post(oauth::exchange_code))
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse { status: "ok" })
}
