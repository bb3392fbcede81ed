//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`MergingtonError`] via `#[from]`.

use crate::email::Email;

/// Top-level error returned by domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum MergingtonError {
    /// A domain invariant was violated while building a value.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested activity does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The participant list is already in the state the request tries to leave.
    #[error("conflict")]
    Conflict(#[from] ConflictError),

    /// A storage adapter failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Invariant violations detected by [`crate::activity::ActivityBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("activity name must not be empty")]
    EmptyName,
    #[error("activity description must not be empty")]
    EmptyDescription,
    #[error("activity schedule must not be empty")]
    EmptySchedule,
    #[error("max participants must be positive")]
    ZeroCapacity,
    #[error("participant {0} is listed more than once")]
    DuplicateParticipant(Email),
}

/// Lookup of a named resource that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Kind of resource, e.g. `"Activity"`.
    pub entity: &'static str,
    /// The key that was looked up.
    pub key: String,
}

/// Enrollment state already matches what the request tries to change.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    #[error("Student is already signed up")]
    AlreadySignedUp { activity: String, email: Email },
    #[error("Student is not signed up for this activity")]
    NotSignedUp { activity: String, email: Email },
}
