//! Session Extractor
//!
//! Pulls the [`CurrentSession`] that the session middleware stored in the
//! request extensions.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::AppError;
use crate::auth::CurrentSession;
use crate::core::ServerState;

impl FromRequestParts<ServerState> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentSession>()
            .cloned()
            .ok_or_else(AppError::unauthorized)
    }
}
