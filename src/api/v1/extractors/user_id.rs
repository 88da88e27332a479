/*
 * Responsibility
 * - Take `{user_id}` from the path as a UUID
 * - A malformed id becomes `AppError::BadRequest` (JSON body, no parser details)
 */
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

use crate::error::AppError;

pub struct UserIdPath(pub Uuid);

impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(user_id) = Path::<Uuid>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection, "rejected user id path segment");
                AppError::bad_request("invalid user id")
            })?;

        Ok(Self(user_id))
    }
}
