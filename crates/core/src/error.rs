use crate::types::DbId;

/// Domain error taxonomy shared by the storage and API layers.
///
/// `NotFound` is the only error callers are expected to recover from;
/// everything else surfaces as a server-side failure.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
