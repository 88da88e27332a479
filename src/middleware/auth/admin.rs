//! Role gate for admin-only routes.
//!
//! Must sit inside `protect`: it reads the `AuthCtx` that `protect` inserted.
//! No `AuthCtx` → `Unauthenticated` (wiring bug, fail closed); not an admin → `Forbidden`.

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::state::AppState;

/// Restrict every route registered on `router` so far to admins.
///
/// Apply this before `protect::apply` so that `protect` ends up as the outer layer.
pub fn apply(router: Router<AppState>) -> Router<AppState> {
    router.route_layer(middleware::from_fn(admin))
}

pub async fn admin(req: Request<Body>, next: Next) -> Result<Response, AppError> {
    let (user_id, is_admin) = match req.extensions().get::<AuthCtx>() {
        Some(ctx) => (ctx.user_id(), ctx.is_admin()),
        None => {
            tracing::error!(
                uri = %req.uri(),
                "admin gate reached without AuthCtx; `protect` must run first"
            );
            return Err(AppError::Unauthenticated);
        }
    };

    if !is_admin {
        tracing::warn!(%user_id, uri = %req.uri(), "non-admin denied");
        return Err(AppError::Forbidden);
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use axum::{Extension, body::to_bytes, http::StatusCode, routing::get};
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::services::auth::Principal;

    fn ctx(is_admin: bool) -> AuthCtx {
        AuthCtx::new(Principal {
            id: Uuid::new_v4(),
            name: "Carol".into(),
            email: "carol@example.com".into(),
            is_admin,
        })
    }

    // Stateless router: the gate itself never touches AppState.
    fn app(ctx: Option<AuthCtx>, hits: Arc<AtomicUsize>) -> Router {
        let router = Router::new()
            .route(
                "/admin",
                get(move || {
                    let hits = hits.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        "ok"
                    }
                }),
            )
            .route_layer(middleware::from_fn(admin));

        match ctx {
            Some(ctx) => router.layer(Extension(ctx)),
            None => router,
        }
    }

    async fn send(app: Router) -> (StatusCode, Vec<u8>) {
        let req = Request::builder().uri("/admin").body(Body::empty()).unwrap();
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn admin_passes_through_once() {
        let hits = Arc::new(AtomicUsize::new(0));
        let (status, body) = send(app(Some(ctx(true)), hits.clone())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn non_admin_is_rejected() {
        let hits = Arc::new(AtomicUsize::new(0));
        let (status, body) = send(app(Some(ctx(false)), hits.clone())).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            serde_json::from_slice::<Value>(&body).unwrap(),
            json!({ "message": "Not authorized as an Admin" })
        );
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_context_fails_closed() {
        let hits = Arc::new(AtomicUsize::new(0));
        let (status, body) = send(app(None, hits.clone())).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            serde_json::from_slice::<Value>(&body).unwrap(),
            json!({ "message": "Not authorized" })
        );
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }
}
