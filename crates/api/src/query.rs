//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?limit=` for capped listings such as the audit log. Clamping happens in
/// the repository layer.
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}
