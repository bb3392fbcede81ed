//! # mergington-adapter-memory
//!
//! In-memory persistence adapter.
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `mergington-app::ports::storage`
//! - Hold the activity records seeded at startup, in display order
//! - Nothing survives a restart
//!
//! ## Dependency rule
//! Depends on `mergington-app` (for port traits) and `mergington-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod activity_repo;
pub mod error;

pub use activity_repo::InMemoryActivityRepository;
pub use error::StorageError;
