//! Dashboard home page: device table, metrics, and traffic breakdown.

use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use netinv_app::ports::DeviceRepository;
use netinv_domain::device::Device;
use netinv_domain::error::InventoryError;
use netinv_domain::summary::TrafficSummary;

use crate::error::status_and_message;
use crate::state::AppState;

/// One row of the device table.
pub struct DeviceRow {
    pub id: i64,
    pub ip: String,
    pub name: String,
    pub band_label: &'static str,
    pub band_slug: &'static str,
    pub traffic_rate: String,
}

impl From<&Device> for DeviceRow {
    fn from(device: &Device) -> Self {
        let band = device.band();
        Self {
            id: device.id.as_i64(),
            ip: device.ip.clone(),
            name: device.name.clone(),
            band_label: band.label(),
            band_slug: band.slug(),
            traffic_rate: format!("{:.1}", device.traffic_rate),
        }
    }
}

/// One bar of the band distribution.
pub struct BandCount {
    pub label: &'static str,
    pub slug: &'static str,
    pub count: usize,
}

/// Summed traffic for one device name.
pub struct NameTraffic {
    pub name: String,
    pub traffic_rate: String,
}

/// Home page template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub error: String,
    pub devices: Vec<DeviceRow>,
    pub total_devices: usize,
    pub average_traffic: String,
    pub high_traffic_devices: usize,
    pub distribution: Vec<BandCount>,
    pub traffic_by_name: Vec<NameTraffic>,
}

impl DashboardTemplate {
    fn from_devices(devices: &[Device]) -> Self {
        let summary = TrafficSummary::from_devices(devices);
        Self {
            error: String::new(),
            devices: devices.iter().map(DeviceRow::from).collect(),
            total_devices: summary.total_devices,
            average_traffic: format!("{:.2}", summary.average_traffic),
            high_traffic_devices: summary.high_traffic_devices,
            distribution: summary
                .distribution
                .into_iter()
                .map(|(band, count)| BandCount {
                    label: band.label(),
                    slug: band.slug(),
                    count,
                })
                .collect(),
            traffic_by_name: summary
                .traffic_by_name
                .into_iter()
                .map(|(name, rate)| NameTraffic {
                    name,
                    traffic_rate: format!("{rate:.1}"),
                })
                .collect(),
        }
    }
}

/// A rendered dashboard page together with its status code.
pub struct DashboardPage {
    status: StatusCode,
    template: DashboardTemplate,
}

impl IntoResponse for DashboardPage {
    fn into_response(self) -> Response {
        match self.template.render() {
            Ok(html) => (self.status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to render dashboard");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Render the page, optionally reporting a failed action.
///
/// The device list is always re-read so the page reflects storage even
/// after an error. If the list itself fails, that failure is shown instead.
pub(crate) async fn render<DR>(
    state: &AppState<DR>,
    failure: Option<InventoryError>,
) -> DashboardPage
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let (mut template, failure) = match state.device_service.list_devices().await {
        Ok(devices) => (DashboardTemplate::from_devices(&devices), failure),
        Err(err) => (DashboardTemplate::from_devices(&[]), Some(err)),
    };

    let mut status = StatusCode::OK;
    if let Some(err) = failure {
        let (code, message) = status_and_message(&err);
        status = code;
        template.error = message;
    }

    DashboardPage { status, template }
}

/// `GET /`: device overview.
pub async fn index<DR>(State(state): State<AppState<DR>>) -> DashboardPage
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    render(&state, None).await
}
