/*
 * Responsibility
 * - What the repo layer reports upward
 * - Callers decide whether a failure is fatal (handlers) or an auth rejection (protect)
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("db error")]
    Db(#[source] sqlx::Error),
    #[error("user directory unavailable: {0}")]
    Unavailable(String),
}

impl RepoError {
    pub fn from_sqlx(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                RepoError::Unavailable(e.to_string())
            }
            e => RepoError::Db(e),
        }
    }
}
