/*
 * Responsibility
 * - Load Config → build dependencies → assemble the Router
 * - Apply app-wide middleware (HTTP / CORS / security headers)
 * - Serve with axum::serve()
 */
use std::{panic, process, sync::Arc};

use anyhow::Result;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    api,
    config::Config,
    middleware,
    services::auth::{PgUserDirectory, UserDirectory, build_authenticator},
    state::AppState,
};

fn init_tracing() {
    // RUST_LOG wins if set, e.g.
    // RUST_LOG=info,dashboard_api=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // stderr may be hidden depending on how the process is launched
        tracing::error!(?info, "panic");

        // Development: crash so it gets noticed. Production: default hook, keep serving.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    // Before the filter is built, so RUST_LOG from .env applies.
    dotenvy::dotenv().ok();
    init_tracing();
    let config = Config::from_env()?;

    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting dashboard API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config).await?;
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn build_state(config: &Config) -> Result<AppState> {
    let db = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;

    let users: Arc<dyn UserDirectory> = Arc::new(PgUserDirectory::new(db));
    let auth = build_authenticator(config, users.clone())?;

    Ok(AppState::new(auth, users))
}

fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .nest("/api/v1", api::v1::routes(state.clone()))
        .with_state(state);

    let router = middleware::security_headers::apply(router);
    let router = middleware::cors::apply(router, config);
    middleware::http::apply(router, config.request_timeout)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::config::AppEnv;
    use crate::services::auth::{
        Authenticator, TokenVerifier, access_jwt::testing::SECRET,
        directory::memory::MemoryUserDirectory,
    };

    fn config() -> Config {
        Config {
            addr: "127.0.0.1:0".parse().unwrap(),
            database_url: "postgres://unused".into(),
            database_max_connections: 1,
            app_env: AppEnv::Development,
            cors_allowed_origins: Vec::new(),
            jwt_secret: SECRET.into(),
            access_token_leeway_seconds: 0,
            user_lookup_timeout: Duration::from_secs(1),
            request_timeout: Duration::from_secs(5),
        }
    }

    fn app() -> Router {
        let users: Arc<dyn UserDirectory> = Arc::new(MemoryUserDirectory::new(vec![]));
        let auth = Authenticator::new(
            TokenVerifier::new(SECRET, 0).unwrap(),
            users.clone(),
            Duration::from_secs(1),
        );
        build_router(AppState::new(Arc::new(auth), users), &config())
    }

    #[tokio::test]
    async fn health_carries_request_id_and_security_headers() {
        let req = Request::builder()
            .uri("/api/v1/health")
            .body(Body::empty())
            .unwrap();
        let res = app().oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().contains_key("x-request-id"));
        assert_eq!(res.headers()["x-frame-options"], "DENY");
        assert_eq!(res.headers()["x-content-type-options"], "nosniff");
        assert_eq!(res.headers()[header::CACHE_CONTROL], "no-store");
    }

    #[tokio::test]
    async fn caller_request_id_is_echoed() {
        let req = Request::builder()
            .uri("/api/v1/health")
            .header("x-request-id", "abc-123")
            .body(Body::empty())
            .unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.headers()["x-request-id"], "abc-123");
    }

    #[tokio::test]
    async fn auth_rejection_survives_outer_layers() {
        let req = Request::builder()
            .uri("/api/v1/users")
            .header(header::AUTHORIZATION, "Bearer invalidtoken")
            .body(Body::empty())
            .unwrap();
        let res = app().oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "message": "Not authorized, token failed" }));
    }
}
