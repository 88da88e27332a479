/*
 * Responsibility
 * - Shared context bound to the Router (AppState)
 *   - auth: verifier + directory lookup used by `protect`
 *   - users: the same directory, for the user endpoints
 * - Cloned per request (everything inside is Arc)
 */
use std::sync::Arc;

use crate::services::auth::{Authenticator, UserDirectory};

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<Authenticator>,
    pub users: Arc<dyn UserDirectory>,
}

impl AppState {
    pub fn new(auth: Arc<Authenticator>, users: Arc<dyn UserDirectory>) -> Self {
        Self { auth, users }
    }
}
