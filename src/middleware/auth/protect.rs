//! Credential check: `Authorization: Bearer <jwt>` → `AuthCtx` in request extensions.
//!
//! - No/garbled header → `AppError::NoToken`
//! - Bad signature, expired, malformed, unknown user, slow or failing lookup
//!   → `AppError::TokenInvalid` (one message for all of them; the cause only goes to the log)

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::state::AppState;

/// Require authentication on every route registered on `router` so far.
///
/// Uses `route_layer` so unknown paths still answer 404 rather than 401.
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 from_fn can't take a State extractor, so pass it via `from_fn_with_state`
    router.route_layer(middleware::from_fn_with_state(state, protect))
}

pub async fn protect(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(req.headers()).ok_or(AppError::NoToken)?;

    let user = match state.auth.authenticate(token).await {
        Ok(user) => user,
        Err(err) => {
            tracing::warn!(error = %err, "access token rejected");
            return Err(AppError::TokenInvalid);
        }
    };

    tracing::debug!(user_id = %user.id, is_admin = user.is_admin, "request authenticated");

    // middleware → admin gate / extractor
    req.extensions_mut().insert(AuthCtx::new(user));

    Ok(next.run(req).await)
}

/// The token part of `Authorization: Bearer <token>`, if the header is usable at all.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
