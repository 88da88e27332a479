/*
 * Responsibility
 * - /users handlers
 * - profile: any authenticated user (behind `protect`)
 * - list / get: admins only (behind `protect` + `admin`)
 */
use axum::{Json, extract::State};

use crate::{
    api::v1::{dto::users::UserResponse, extractors::{AuthCtxExtractor, UserIdPath}},
    error::AppError,
    state::AppState,
};

pub async fn profile(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<UserResponse> {
    Json(ctx.user.into())
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.users.list().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

pub async fn get_user(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or(AppError::not_found("user"))?;

    Ok(Json(user.into()))
}
