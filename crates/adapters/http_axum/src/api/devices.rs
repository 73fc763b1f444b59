//! JSON REST handlers for devices.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use netinv_app::ports::DeviceRepository;
use netinv_domain::device::{Device, NewDevice};
use netinv_domain::error::{InventoryError, NotFoundError, ValidationError};
use netinv_domain::id::DeviceId;
use netinv_domain::status::TrafficStatus;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for adding a device.
///
/// Fields are kept as raw JSON so that missing, `null`, and wrongly typed
/// values can be told apart during validation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddDeviceRequest {
    pub ip: Option<Value>,
    pub name: Option<Value>,
    pub traffic_rate: Option<Value>,
}

impl AddDeviceRequest {
    /// Read a request from a parsed JSON body.
    ///
    /// Only a JSON object is accepted. Arrays would otherwise bind to the
    /// fields by position.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedBody`] for any non-object body.
    pub fn from_json(body: Value) -> Result<Self, ValidationError> {
        match body {
            Value::Object(_) => {
                serde_json::from_value(body).map_err(|_| ValidationError::MalformedBody)
            }
            _ => Err(ValidationError::MalformedBody),
        }
    }

    /// Validate the raw fields into a [`NewDevice`].
    ///
    /// `ip` and `traffic_rate` accept any JSON scalar (a number rate is
    /// taken as-is, a string rate is parsed). `name` must be a string;
    /// anything else counts as missing.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate(self) -> Result<NewDevice, ValidationError> {
        let mut builder = NewDevice::builder();
        if let Some(ip) = self.ip.and_then(scalar_text) {
            builder = builder.ip(ip);
        }
        if let Some(Value::String(name)) = self.name {
            builder = builder.name(name);
        }
        if let Some(rate) = self.traffic_rate.and_then(scalar_text) {
            builder = builder.traffic_rate(rate);
        }
        builder.build()
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

/// Device as exposed by the API, with its derived status.
#[derive(Debug, Serialize)]
pub struct DeviceBody {
    pub id: DeviceId,
    pub ip: String,
    pub name: String,
    pub traffic_rate: f64,
    pub status: TrafficStatus,
}

impl From<Device> for DeviceBody {
    fn from(device: Device) -> Self {
        let status = device.status();
        Self {
            id: device.id,
            ip: device.ip,
            name: device.name,
            traffic_rate: device.traffic_rate,
            status,
        }
    }
}

/// `{ "devices": [...] }`
#[derive(Debug, Serialize)]
pub struct DeviceListBody {
    pub devices: Vec<DeviceBody>,
}

/// `{ "message": ..., "device": {...} }`
#[derive(Debug, Serialize)]
pub struct CreatedBody {
    pub message: String,
    pub device: DeviceBody,
}

/// `{ "message": ... }`
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<DeviceListBody>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<CreatedBody>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok(Json<MessageBody>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Parse a device id from a path segment.
///
/// Anything that is not a positive integer cannot name a stored device, so
/// it is reported as not found rather than as bad input.
pub(crate) fn parse_device_id(raw: &str) -> Result<DeviceId, InventoryError> {
    DeviceId::from_str(raw).map_err(|_| {
        NotFoundError {
            entity: "device",
            id: raw.to_string(),
        }
        .into()
    })
}

/// `GET /api/devices`
pub async fn list<DR>(State(state): State<AppState<DR>>) -> Result<ListResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let devices = state.device_service.list_devices().await?;
    Ok(ListResponse::Ok(Json(DeviceListBody {
        devices: devices.into_iter().map(DeviceBody::from).collect(),
    })))
}

/// `POST /api/devices`
pub async fn create<DR>(
    State(state): State<AppState<DR>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "rejected device payload");
        InventoryError::from(ValidationError::MalformedBody)
    })?;
    let device = AddDeviceRequest::from_json(body)
        .and_then(AddDeviceRequest::validate)
        .map_err(InventoryError::from)?;
    let created = state.device_service.add_device(device).await?;
    Ok(CreateResponse::Created(Json(CreatedBody {
        message: "Device added successfully".to_string(),
        device: created.into(),
    })))
}

/// `DELETE /api/devices/{id}`
pub async fn delete<DR>(
    State(state): State<AppState<DR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let device_id = parse_device_id(&id)?;
    state.device_service.delete_device(device_id).await?;
    Ok(DeleteResponse::Ok(Json(MessageBody {
        message: format!("Device with ID {device_id} deleted successfully"),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: Value) -> AddDeviceRequest {
        AddDeviceRequest::from_json(value).unwrap()
    }

    #[test]
    fn should_reject_non_object_body_as_malformed() {
        for body in [json!(["10.0.0.5", "R5", 12]), json!("10.0.0.5"), json!(null), json!(3)] {
            assert_eq!(
                AddDeviceRequest::from_json(body.clone()).unwrap_err(),
                ValidationError::MalformedBody,
                "{body}"
            );
        }
    }

    #[test]
    fn should_validate_numeric_rate() {
        let device = request(json!({"ip": "10.0.0.1", "name": "R1", "traffic_rate": 49.9}))
            .validate()
            .unwrap();
        assert!((device.traffic_rate() - 49.9).abs() < f64::EPSILON);
    }

    #[test]
    fn should_validate_string_rate() {
        let device = request(json!({"ip": "10.0.0.1", "name": "R1", "traffic_rate": "7.5"}))
            .validate()
            .unwrap();
        assert!((device.traffic_rate() - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn should_treat_null_as_missing() {
        let result = request(json!({"ip": "10.0.0.1", "name": "R1", "traffic_rate": null}))
            .validate();
        assert_eq!(result.unwrap_err(), ValidationError::MissingFields);
    }

    #[test]
    fn should_treat_non_string_name_as_missing() {
        let result = request(json!({"ip": "10.0.0.1", "name": 5, "traffic_rate": 1}))
            .validate();
        assert_eq!(result.unwrap_err(), ValidationError::MissingFields);
    }

    #[test]
    fn should_reject_numeric_ip_as_invalid_format() {
        let result = request(json!({"ip": 10, "name": "R1", "traffic_rate": 1})).validate();
        assert_eq!(result.unwrap_err(), ValidationError::InvalidIp);
    }

    #[test]
    fn should_reject_boolean_rate() {
        let result = request(json!({"ip": "10.0.0.1", "name": "R1", "traffic_rate": true}))
            .validate();
        assert_eq!(result.unwrap_err(), ValidationError::InvalidTrafficRate);
    }

    #[test]
    fn should_map_bad_path_ids_to_not_found() {
        for raw in ["abc", "0", "-1", "1.5"] {
            assert!(
                matches!(parse_device_id(raw), Err(InventoryError::NotFound(_))),
                "{raw}"
            );
        }
        assert_eq!(parse_device_id("12").unwrap(), DeviceId::new(12));
    }

    #[test]
    fn should_serialize_device_with_status() {
        let body = DeviceBody::from(Device {
            id: DeviceId::new(1),
            ip: "10.0.0.1".to_string(),
            name: "R1".to_string(),
            traffic_rate: 50.0,
        });
        let value = serde_json::to_value(body).unwrap();
        assert_eq!(
            value,
            json!({"id": 1, "ip": "10.0.0.1", "name": "R1", "traffic_rate": 50.0, "status": "Alto"})
        );
    }
}
