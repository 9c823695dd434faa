//! Employee entity model and DTOs.

use aqar_core::permissions::PermissionSet;
use aqar_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full employee row from the `employees` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`EmployeeResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Employee {
    pub id: DbId,
    pub name: String,
    /// Job title shown in the staff list (free text, not an access level).
    pub role: String,
    pub username: String,
    pub password_hash: String,
    /// Serialized permission list; read through [`Employee::permission_set`].
    pub permissions: String,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Employee {
    pub fn permission_set(&self) -> PermissionSet {
        PermissionSet::from_stored(&self.permissions)
    }

    pub fn has_permission(&self, tag: &str) -> bool {
        self.permission_set().contains(tag)
    }
}

/// Safe employee representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeResponse {
    pub id: DbId,
    pub name: String,
    pub role: String,
    pub username: String,
    pub permissions: Vec<String>,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl From<&Employee> for EmployeeResponse {
    fn from(e: &Employee) -> Self {
        Self {
            id: e.id,
            name: e.name.clone(),
            role: e.role.clone(),
            username: e.username.clone(),
            permissions: e.permission_set().into_tags(),
            last_login_at: e.last_login_at,
            created_at: e.created_at,
        }
    }
}

/// DTO for creating a new employee.
#[derive(Debug)]
pub struct CreateEmployee {
    pub name: String,
    pub role: String,
    pub username: String,
    pub password_hash: String,
    pub permissions: PermissionSet,
}

/// DTO for updating an employee. `None` fields keep their current value.
#[derive(Debug, Default)]
pub struct UpdateEmployee {
    pub name: Option<String>,
    pub role: Option<String>,
    pub username: Option<String>,
    pub permissions: Option<PermissionSet>,
    /// A new argon2 hash. Setting it revokes the employee's sessions.
    pub password_hash: Option<String>,
}
