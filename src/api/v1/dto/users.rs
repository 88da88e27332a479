/*
 * Responsibility
 * - Response DTO for /users endpoints
 * - camelCase on the wire (`isAdmin`), matching what the dashboard reads
 */
use serde::Serialize;
use uuid::Uuid;

use crate::services::auth::Principal;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

impl From<Principal> for UserResponse {
    fn from(p: Principal) -> Self {
        Self {
            id: p.id,
            name: p.name,
            email: p.email,
            is_admin: p.is_admin,
        }
    }
}
