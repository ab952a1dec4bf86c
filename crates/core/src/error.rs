use crate::types::DbId;

/// Domain-level errors raised by the mapper and service layers.
///
/// `NotFound` is the only error the CRUD path raises on its own: every
/// id-based lookup that fails to resolve a record expected to exist
/// produces one, with the resource-kind label baked into the message.
/// Validation failures are rejected at the HTTP boundary and never
/// originate here.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An id-based lookup did not resolve to a live record.
    #[error("{entity} with id \"{id}\" not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed a domain-level constraint.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Unrecoverable infrastructure failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Build a `NotFound` for the given resource-kind label and id.
    ///
    /// Centralized so every resource formats the message identically.
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        CoreError::NotFound { entity, id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_not_found_message_quotes_id() {
        let id = Uuid::nil();
        let err = CoreError::not_found("Course", id);
        assert_eq!(
            err.to_string(),
            "Course with id \"00000000-0000-0000-0000-000000000000\" not found"
        );
    }

    #[test]
    fn test_not_found_default_label_reads_naturally() {
        let id = Uuid::nil();
        let err = CoreError::not_found("Record", id);
        assert!(err.to_string().starts_with("Record with id"));
    }
}
