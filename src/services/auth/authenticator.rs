//! Bearer token → `Principal`.
//!
//! Verification is local (signature + `exp`); the lookup goes through the
//! injected `UserDirectory` and is bounded by `lookup_timeout`.
use std::{fmt, sync::Arc, time::Duration};

use thiserror::Error;
use uuid::Uuid;

use crate::repos::error::RepoError;
use crate::services::auth::{
    Principal, UserDirectory,
    access_jwt::{AccessJwtError, TokenVerifier},
};

/// Why authentication failed. Logged, never shown to the client.
#[derive(Debug, Error)]
pub enum AuthFailure {
    #[error(transparent)]
    Token(#[from] AccessJwtError),
    #[error("no user with id {0}")]
    UnknownUser(Uuid),
    #[error("user lookup failed: {0}")]
    Lookup(#[from] RepoError),
    #[error("user lookup timed out after {0:?}")]
    LookupTimeout(Duration),
}

#[derive(Clone)]
pub struct Authenticator {
    verifier: TokenVerifier,
    directory: Arc<dyn UserDirectory>,
    lookup_timeout: Duration,
}

impl fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authenticator")
            .field("verifier", &self.verifier)
            .field("lookup_timeout", &self.lookup_timeout)
            .finish()
    }
}

impl Authenticator {
    pub fn new(
        verifier: TokenVerifier,
        directory: Arc<dyn UserDirectory>,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            verifier,
            directory,
            lookup_timeout,
        }
    }

    pub async fn authenticate(&self, token: &str) -> Result<Principal, AuthFailure> {
        let verified = self.verifier.verify(token)?;

        tracing::debug!(
            user_id = %verified.user_id,
            exp = verified.expires_at,
            iat = ?verified.issued_at,
            "access token verified"
        );

        let found = tokio::time::timeout(
            self.lookup_timeout,
            self.directory.find_by_id(verified.user_id),
        )
        .await
        .map_err(|_| AuthFailure::LookupTimeout(self.lookup_timeout))??;

        found.ok_or(AuthFailure::UnknownUser(verified.user_id))
    }
}
