//! Repository for the `user_sessions` table.

use aqar_core::types::DbId;
use sqlx::PgPool;

use crate::models::session::{CreateSession, UserSession};

const COLUMNS: &str = "id, employee_id, refresh_token_hash, expires_at, is_revoked, \
                        created_at, updated_at";

/// Refresh-token sessions. One row per issued refresh token.
pub struct SessionRepo;

impl SessionRepo {
    pub async fn create(pool: &PgPool, input: &CreateSession) -> Result<UserSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_sessions (employee_id, refresh_token_hash, expires_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserSession>(&query)
            .bind(input.employee_id)
            .bind(&input.refresh_token_hash)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Consume an active session by its refresh token hash.
    ///
    /// The lookup and the revocation are one statement, so a token can be
    /// redeemed at most once. Returns `None` for unknown, revoked or expired
    /// tokens.
    pub async fn redeem(pool: &PgPool, hash: &str) -> Result<Option<UserSession>, sqlx::Error> {
        let query = format!(
            "UPDATE user_sessions SET is_revoked = true
             WHERE refresh_token_hash = $1
               AND is_revoked = false
               AND expires_at > NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserSession>(&query)
            .bind(hash)
            .fetch_optional(pool)
            .await
    }

    /// Revoke every active session of an employee. Returns how many were revoked.
    pub async fn revoke_all_for_employee(
        pool: &PgPool,
        employee_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE user_sessions SET is_revoked = true
             WHERE employee_id = $1 AND is_revoked = false",
        )
        .bind(employee_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
