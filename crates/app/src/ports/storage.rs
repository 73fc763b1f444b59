//! Storage port: repository trait for device persistence.

use std::future::Future;

use netinv_domain::device::{Device, NewDevice};
use netinv_domain::error::InventoryError;
use netinv_domain::id::DeviceId;

/// Persistence for the device table.
///
/// Every method is atomic on its own; implementations must enforce `ip`
/// uniqueness in storage rather than by checking first.
pub trait DeviceRepository {
    /// All devices in insertion order.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Device>, InventoryError>> + Send;

    /// Store a new device and return it with its assigned id.
    ///
    /// Fails with [`InventoryError::Conflict`] when the ip is already taken.
    fn insert(
        &self,
        device: NewDevice,
    ) -> impl Future<Output = Result<Device, InventoryError>> + Send;

    /// Remove a device.
    ///
    /// Fails with [`InventoryError::NotFound`] when no row has that id.
    fn delete(&self, id: DeviceId) -> impl Future<Output = Result<(), InventoryError>> + Send;
}
