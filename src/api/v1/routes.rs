/*
 * Responsibility
 * - v1 URL layout
 * - Which routes sit behind `protect`, and which additionally behind `admin`
 *
 * Layering: `admin` is applied to the admin routes first, then `protect` over
 * everything authenticated, so `protect` always runs before `admin`.
 */
use axum::{Router, routing::get};

use crate::middleware::auth::{admin, protect};
use crate::state::AppState;

use crate::api::v1::handlers::{
    health::health,
    users::{get_user, list_users, profile},
};

pub fn routes(state: AppState) -> Router<AppState> {
    let admin_only = admin::apply(
        Router::new()
            .route("/users", get(list_users))
            .route("/users/{user_id}", get(get_user)),
    );

    let authenticated = protect::apply(
        Router::new()
            .route("/users/profile", get(profile))
            .merge(admin_only),
        state,
    );

    Router::new()
        .route("/health", get(health))
        .merge(authenticated)
}
