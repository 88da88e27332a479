/*
 * Responsibility
 * - SQLx access to the `users` table
 * - Read-only: lookup by id (auth) and listing (admin endpoints)
 */
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

pub async fn list(db: &PgPool) -> Result<Vec<UserRow>, RepoError> {
    let rows = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, name, email, is_admin
        FROM users
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(rows)
}

pub async fn get(db: &PgPool, user_id: Uuid) -> Result<Option<UserRow>, RepoError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, name, email, is_admin
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(row)
}
