//! Repository for the `employees` table.

use aqar_core::permissions::PermissionSet;
use aqar_core::types::DbId;
use sqlx::PgPool;

use crate::models::employee::{CreateEmployee, Employee, UpdateEmployee};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, role, username, password_hash, permissions, \
                        last_login_at, created_at, updated_at";

/// Provides CRUD operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new employee, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEmployee) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees (name, role, username, password_hash, permissions)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.username)
            .bind(&input.password_hash)
            .bind(input.permissions.to_stored())
            .fetch_one(pool)
            .await
    }

    /// Find an employee by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an employee by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE username = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// List all employees, oldest first (the order they were hired in).
    pub async fn list(pool: &PgPool) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees ORDER BY id ASC");
        sqlx::query_as::<_, Employee>(&query).fetch_all(pool).await
    }

    /// Update an employee. Only non-`None` fields in `input` are applied.
    ///
    /// A password change also revokes the employee's refresh sessions, in the
    /// same transaction. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEmployee,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE employees SET
                name = COALESCE($2, name),
                role = COALESCE($3, role),
                username = COALESCE($4, username),
                permissions = COALESCE($5, permissions),
                password_hash = COALESCE($6, password_hash)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let employee = sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.username)
            .bind(input.permissions.as_ref().map(|p| p.to_stored()))
            .bind(&input.password_hash)
            .fetch_optional(&mut *tx)
            .await?;

        if employee.is_some() && input.password_hash.is_some() {
            sqlx::query(
                "UPDATE user_sessions SET is_revoked = true
                 WHERE employee_id = $1 AND is_revoked = false",
            )
            .bind(id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(employee)
    }

    /// Replace the stored permission list outright.
    pub async fn update_permissions(
        pool: &PgPool,
        id: DbId,
        permissions: &PermissionSet,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE employees SET permissions = $2 WHERE id = $1")
            .bind(id)
            .bind(permissions.to_stored())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Record a successful login by stamping `last_login_at`.
    pub async fn record_successful_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE employees SET last_login_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Delete an employee. Sessions cascade. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM employees")
            .fetch_one(pool)
            .await
    }
}
