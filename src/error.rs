/*
 * Responsibility
 * - Shared AppError for handlers and middleware
 * - IntoResponse (HTTP status / JSON `{ "message": ... }` body)
 * - Internal causes (token, lookup, repo) are logged by the caller and never rendered
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::repos::error::RepoError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not authorized, no token")]
    NoToken,
    #[error("Not authorized, token failed")]
    TokenInvalid,
    #[error("Not authorized as an Admin")]
    Forbidden,
    #[error("Not authorized")]
    Unauthenticated,
    #[error("{message}")]
    BadRequest { message: &'static str },
    #[error("{resource} not found")]
    NotFound { resource: &'static str },
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn bad_request(message: &'static str) -> Self {
        Self::BadRequest { message }
    }

    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            // The role gate answers 401 as well; clients only branch on the message.
            AppError::NoToken
            | AppError::TokenInvalid
            | AppError::Forbidden
            | AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        tracing::error!(error = ?e, "repository failure");
        AppError::Internal
    }
}
