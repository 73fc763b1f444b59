//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`InventoryError`] via `#[from]`. The HTTP adapter is the only place that
//! turns these into status codes.

/// Top-level error returned by services and repository ports.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// Client input was missing or malformed. Never reaches storage.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A uniqueness constraint was violated.
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// The referenced record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The storage medium failed (unavailable, corrupt, …).
    #[error("{0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons a device submission is rejected.
///
/// Checked in declaration order; the first violation wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing fields")]
    MissingFields,

    #[error("invalid ip format")]
    InvalidIp,

    #[error("invalid traffic rate")]
    InvalidTrafficRate,

    /// The request body could not be decoded at all.
    #[error("malformed request body")]
    MalformedBody,
}

/// A record with the same unique key already exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{key} already exists")]
pub struct ConflictError {
    /// Name of the unique column (e.g. `ip`).
    pub key: &'static str,
    /// The offending value.
    pub value: String,
}

/// No record matches the given identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Lower-case kind of record (e.g. `device`).
    pub entity: &'static str,
    /// The identifier that was looked up.
    pub id: String,
}
