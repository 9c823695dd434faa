//! First-run setup: the initial administrator account.

use aqar_core::permissions;
use aqar_db::models::employee::{CreateEmployee, Employee};
use aqar_db::repositories::EmployeeRepo;
use aqar_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::AdminSeed;
use crate::error::{AppError, AppResult};

const ADMIN_NAME: &str = "المدير العام";
const ADMIN_ROLE: &str = "مدير";

/// Create the administrator when the `employees` table is empty.
///
/// The account is granted every catalogued permission. Returns the created
/// row, or `None` when employees already exist or no password is configured.
pub async fn ensure_admin(pool: &DbPool, seed: &AdminSeed) -> AppResult<Option<Employee>> {
    if EmployeeRepo::count(pool).await? > 0 {
        return Ok(None);
    }

    let Some(password) = seed.password.as_deref() else {
        tracing::warn!("No employees exist and ADMIN_PASSWORD is unset; nobody can log in");
        return Ok(None);
    };

    let password_hash = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let input = CreateEmployee {
        name: ADMIN_NAME.to_string(),
        role: ADMIN_ROLE.to_string(),
        username: seed.username.clone(),
        password_hash,
        permissions: permissions::PermissionSet::new(permissions::all_tags()),
    };
    let admin = EmployeeRepo::create(pool, &input).await?;

    tracing::info!(username = %admin.username, "Created initial administrator");
    Ok(Some(admin))
}
