//! Device service: use-cases for managing the device inventory.

use netinv_domain::device::{Device, NewDevice};
use netinv_domain::error::InventoryError;
use netinv_domain::id::DeviceId;

use crate::ports::DeviceRepository;

/// Application service for device list/add/delete.
pub struct DeviceService<R> {
    repo: R,
}

impl<R: DeviceRepository> DeviceService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all devices in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_devices(&self) -> Result<Vec<Device>, InventoryError> {
        self.repo.list_all().await
    }

    /// Store a validated device.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Conflict`] if the ip is already registered,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, device), fields(ip = %device.ip()))]
    pub async fn add_device(&self, device: NewDevice) -> Result<Device, InventoryError> {
        let created = self.repo.insert(device).await?;
        tracing::info!(id = %created.id, "device added");
        Ok(created)
    }

    /// Delete a device by id.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NotFound`] when no device with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_device(&self, id: DeviceId) -> Result<(), InventoryError> {
        self.repo.delete(id).await?;
        tracing::info!("device deleted");
        Ok(())
    }
}
