use crate::domain::validation::ValidationErrors;
use crate::storage::StoreError;

/// Errors surfaced by the add and browse paths.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// The candidate failed one or more field rules; nothing was stored.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    /// The record was valid but the gateway refused the append.
    #[error("Failed to add school, please try again")]
    SubmitFailed(#[source] StoreError),
    #[error("school {0} not found")]
    NotFound(u64),
    #[error(transparent)]
    Store(#[from] StoreError),
}
