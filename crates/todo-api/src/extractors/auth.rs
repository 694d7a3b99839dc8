//! `AuthUser` extractor: runs the authorizer on the Authorization header.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use todo_auth::{AuthDecision, Principal};
use todo_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated principal available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Principal);

impl std::ops::Deref for AuthUser {
    type Target = Principal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        match state.authorizer.authorize(header).await {
            AuthDecision::Allow { principal } => Ok(AuthUser(principal)),
            AuthDecision::Deny => Err(AppError::authentication("Unauthorized").into()),
        }
    }
}
