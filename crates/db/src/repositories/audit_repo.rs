//! Repository for the append-only `audit_logs` table.

use sqlx::PgPool;

use crate::models::audit::AuditLog;

const COLUMNS: &str = "id, username, action, created_at";

/// Default number of entries returned by [`AuditLogRepo::list_recent`].
pub const DEFAULT_LIMIT: i64 = 100;

/// Hard cap on entries per request.
pub const MAX_LIMIT: i64 = 500;

pub struct AuditLogRepo;

impl AuditLogRepo {
    /// Append an entry for `username` performing `action`.
    pub async fn insert(
        pool: &PgPool,
        username: &str,
        action: &str,
    ) -> Result<AuditLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO audit_logs (username, action) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AuditLog>(&query)
            .bind(username)
            .bind(action)
            .fetch_one(pool)
            .await
    }

    /// Most recent entries first. `limit` is clamped to `1..=MAX_LIMIT`.
    pub async fn list_recent(pool: &PgPool, limit: Option<i64>) -> Result<Vec<AuditLog>, sqlx::Error> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let query = format!(
            "SELECT {COLUMNS} FROM audit_logs ORDER BY created_at DESC, id DESC LIMIT $1"
        );
        sqlx::query_as::<_, AuditLog>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM audit_logs")
            .fetch_one(pool)
            .await
    }
}
