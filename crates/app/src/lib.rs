//! # mergington-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **driven port** adapters must implement:
//!   - `ActivityRepository` — read and write back activity records
//! - Define the **driving port** as a use-case struct:
//!   - `ActivityService` — list, enroll, unenroll
//! - Serialize mutations so the "no duplicate participant" rule holds under
//!   a multi-threaded server
//!
//! ## Dependency rule
//! Depends on `mergington-domain` only (plus `tokio::sync` for the write lock).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
