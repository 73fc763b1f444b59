//! # netinv-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** storage adapters must implement:
//!   - `DeviceRepository`: initialize-once store with list / insert / delete
//! - Define the **driving/inbound** use-case struct:
//!   - `DeviceService`: list, add, delete
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `netinv-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
