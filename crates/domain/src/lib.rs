//! # netinv-domain
//!
//! Pure domain model for the netinv device inventory.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Devices** (monitored network endpoints: ip, name, traffic rate)
//! - Validate device input before it ever reaches storage
//! - Derive traffic **status** (API) and **bands** (dashboard) at read time
//! - Aggregate inventory-wide traffic figures
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod device;
pub mod status;
pub mod summary;
