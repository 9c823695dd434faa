//! Audit log entity. Rows are never updated or deleted by the application.

use aqar_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A single audit entry: who did what, and when.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuditLog {
    pub id: DbId,
    pub username: String,
    pub action: String,
    #[serde(rename = "timestamp")]
    pub created_at: Timestamp,
}
