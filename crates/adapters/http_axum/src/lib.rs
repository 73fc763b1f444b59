//! # netinv-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** (`/api/devices`) consumed by external clients
//! - Validate and shape incoming requests before they reach the service
//! - Be the single place where domain errors become HTTP status codes
//! - Serve a **server-side-rendered HTML dashboard** with plain forms and
//!   no JavaScript (POST + redirect for add/delete)
//!
//! ## Dependency rule
//! Depends on `netinv-app` (for port traits and services) and `netinv-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
