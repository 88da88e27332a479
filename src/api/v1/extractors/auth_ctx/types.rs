/*
 * Responsibility
 * - The "authenticated context" type handlers and the role gate see
 * - `protect` verifies the token, resolves the user and stores this in request extensions
 *
 * Notes
 * - Present in extensions if and only if `protect` succeeded for this request
 */

use uuid::Uuid;

use crate::services::auth::Principal;

/// Context attached to an authenticated request.
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub user: Principal,
}

impl AuthCtx {
    pub fn new(user: Principal) -> Self {
        Self { user }
    }

    pub fn user_id(&self) -> Uuid {
        self.user.id
    }

    pub fn is_admin(&self) -> bool {
        self.user.is_admin
    }
}
