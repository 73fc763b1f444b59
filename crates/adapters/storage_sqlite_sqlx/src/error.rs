//! Storage-specific error type wrapping sqlx errors.

use netinv_domain::error::InventoryError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The database could not be opened or created.
    #[error("storage unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    /// The directory holding the database file could not be created.
    #[error("storage unavailable: {0}")]
    Directory(#[from] std::io::Error),

    /// A query failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for InventoryError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
