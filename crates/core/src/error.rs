//! Domain error type shared by every crate in the workspace.

use crate::types::DbId;

/// Errors raised by domain rules and surfaced through the API as
/// structured JSON responses.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A row the caller referenced by id does not exist (or is outside the
    /// district it was requested under).
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Uniqueness clash, e.g. an employee username that is already taken.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The employee is authenticated but lacks the permission tag.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Validation error for a form field that must not be blank.
    pub fn required(field: &str) -> Self {
        Self::Validation(format!("Field '{field}' is required"))
    }

    /// Forbidden error naming the missing permission tag.
    pub fn missing_permission(tag: &str) -> Self {
        Self::Forbidden(format!("Missing permission '{tag}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "RentalOffer",
            id: 7,
        };
        assert_eq!(err.to_string(), "RentalOffer with id 7 not found");
    }

    #[test]
    fn required_names_the_field() {
        let err = CoreError::required("customer_name");
        assert!(err.to_string().contains("customer_name"));
    }
}
