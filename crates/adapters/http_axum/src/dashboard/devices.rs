//! Dashboard form handlers for adding and deleting devices.

use axum::extract::{Form, Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;

use netinv_app::ports::DeviceRepository;
use netinv_domain::device::NewDevice;
use netinv_domain::error::InventoryError;

use super::home::{DashboardPage, render};
use crate::api::devices::parse_device_id;
use crate::state::AppState;

/// Form data for the add-device form.
#[derive(Debug, Deserialize)]
pub struct AddDeviceForm {
    pub ip: Option<String>,
    pub name: Option<String>,
    pub traffic_rate: Option<String>,
}

impl AddDeviceForm {
    fn validate(self) -> Result<NewDevice, InventoryError> {
        let mut builder = NewDevice::builder();
        if let Some(ip) = self.ip {
            builder = builder.ip(ip.trim());
        }
        if let Some(name) = self.name {
            builder = builder.name(name.trim());
        }
        if let Some(rate) = self.traffic_rate {
            builder = builder.traffic_rate(rate);
        }
        Ok(builder.build()?)
    }
}

/// Response from a form handler (PRG pattern).
pub enum FormResponse {
    /// Action succeeded; back to the overview.
    Redirect(Redirect),
    /// Action failed; overview re-rendered with the error.
    Page(DashboardPage),
}

impl IntoResponse for FormResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(redirect) => redirect.into_response(),
            Self::Page(page) => page.into_response(),
        }
    }
}

/// `POST /devices`: add a device from the form.
pub async fn create<DR>(
    State(state): State<AppState<DR>>,
    Form(form): Form<AddDeviceForm>,
) -> FormResponse
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let result = match form.validate() {
        Ok(device) => state.device_service.add_device(device).await.map(|_| ()),
        Err(err) => Err(err),
    };
    finish(&state, result).await
}

/// `POST /devices/{id}/delete`: delete a device from its table row.
pub async fn delete<DR>(
    State(state): State<AppState<DR>>,
    Path(id): Path<String>,
) -> FormResponse
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let result = match parse_device_id(&id) {
        Ok(device_id) => state.device_service.delete_device(device_id).await,
        Err(err) => Err(err),
    };
    finish(&state, result).await
}

async fn finish<DR>(state: &AppState<DR>, result: Result<(), InventoryError>) -> FormResponse
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    match result {
        Ok(()) => FormResponse::Redirect(Redirect::to("/")),
        Err(err) => FormResponse::Page(render(state, Some(err)).await),
    }
}
