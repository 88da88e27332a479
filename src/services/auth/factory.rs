/// Factory: build the `Authenticator` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::error::AppError;
use crate::services::auth::{Authenticator, TokenVerifier, UserDirectory};

pub fn build_authenticator(
    config: &Config,
    directory: Arc<dyn UserDirectory>,
) -> Result<Arc<Authenticator>, AppError> {
    let verifier = TokenVerifier::new(&config.jwt_secret, config.access_token_leeway_seconds)
        .map_err(|e| {
            tracing::error!(error = %e, "failed to build access token verifier");
            AppError::Internal
        })?;

    Ok(Arc::new(Authenticator::new(
        verifier,
        directory,
        config.user_lookup_timeout,
    )))
}
