//! User directory: resolves a token's subject id to a `Principal`.
//!
//! `protect` only depends on the trait, so tests swap in `MemoryUserDirectory`.
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::repos::{error::RepoError, user_repo};
use crate::services::auth::Principal;

#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// `Ok(None)` means the id is well-formed but no such user exists.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Principal>, RepoError>;

    async fn list(&self) -> Result<Vec<Principal>, RepoError>;
}

#[derive(Clone, Debug)]
pub struct PgUserDirectory {
    db: PgPool,
}

impl PgUserDirectory {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserDirectory for PgUserDirectory {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Principal>, RepoError> {
        let row = user_repo::get(&self.db, id).await?;
        Ok(row.map(Principal::from))
    }

    async fn list(&self) -> Result<Vec<Principal>, RepoError> {
        let rows = user_repo::list(&self.db).await?;
        Ok(rows.into_iter().map(Principal::from).collect())
    }
}

#[cfg(test)]
pub mod memory {
    use std::time::Duration;

    use super::*;

    /// In-memory directory for tests. `delay` simulates a slow backend, `unavailable` a down one.
    #[derive(Clone, Debug, Default)]
    pub struct MemoryUserDirectory {
        users: Vec<Principal>,
        delay: Option<Duration>,
        unavailable: bool,
    }

    impl MemoryUserDirectory {
        pub fn new(users: Vec<Principal>) -> Self {
            Self {
                users,
                ..Self::default()
            }
        }

        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        pub fn unavailable(mut self) -> Self {
            self.unavailable = true;
            self
        }
    }

    #[async_trait]
    impl UserDirectory for MemoryUserDirectory {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Principal>, RepoError> {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            if self.unavailable {
                return Err(RepoError::Unavailable("memory directory offline".into()));
            }
            Ok(self.users.iter().find(|u| u.id == id).cloned())
        }

        async fn list(&self) -> Result<Vec<Principal>, RepoError> {
            if self.unavailable {
                return Err(RepoError::Unavailable("memory directory offline".into()));
            }
            Ok(self.users.clone())
        }
    }
}
