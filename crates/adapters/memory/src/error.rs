//! Storage-specific error type.

use mergington_domain::error::MergingtonError;

/// Errors originating from the in-memory storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A writer panicked while holding the lock.
    #[error("activity store lock poisoned")]
    Poisoned,
}

impl From<StorageError> for MergingtonError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
