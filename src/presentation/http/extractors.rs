// src/presentation/http/extractors.rs
use crate::{application::error::ApplicationError, presentation::http::state::HttpState};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Proof that the caller presented a live service API token.
///
/// Placed before the body extractor in a handler's argument list, so the
/// token is checked before any request payload is parsed.
#[derive(Debug, Clone)]
pub struct ServiceAuthenticated;

impl<S> FromRequestParts<S> for ServiceAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
            })?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized("invalid service token"))
            })?;

        app_state
            .services
            .service_tokens
            .authenticate(header.token())
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self)
    }
}
