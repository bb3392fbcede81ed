//! # mergington-domain
//!
//! Pure domain model for the Mergington High School activities directory.
//!
//! ## Responsibilities
//! - Foundational types: the error taxonomy and the [`Email`](email::Email) newtype
//! - Define **Activities** (named offerings with a schedule, a capacity and
//!   an ordered participant list)
//! - Enforce the enrollment rules: no duplicate participant within one
//!   activity, unenroll only what is enrolled
//! - Provide the **seed catalog** loaded once at process start
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod activity;
pub mod catalog;
pub mod email;
