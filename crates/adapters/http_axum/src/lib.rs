//! # mergington-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **activities JSON API**
//!   (`GET /activities`, `POST|DELETE /activities/{name}/signup`)
//! - Serve the static landing page from a directory under `/static`, and
//!   redirect `/` to it
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into JSON responses
//!
//! ## Dependency rule
//! Depends on `mergington-app` (for port traits and services) and
//! `mergington-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
