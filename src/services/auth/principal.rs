use uuid::Uuid;

use crate::repos::user_repo::UserRow;

/// The authenticated user a bearer token resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

impl From<UserRow> for Principal {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            is_admin: row.is_admin,
        }
    }
}
