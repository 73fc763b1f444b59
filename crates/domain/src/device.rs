//! Device: a monitored network endpoint (ip, name, traffic rate).

use crate::error::ValidationError;
use crate::id::DeviceId;
use crate::status::{TrafficBand, TrafficStatus};

/// A persisted device record.
///
/// `id` is assigned by storage and never changes. The status is not stored;
/// it is derived from `traffic_rate` on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    pub id: DeviceId,
    pub ip: String,
    pub name: String,
    /// Throughput in Mbps, always `>= 0`.
    pub traffic_rate: f64,
}

impl Device {
    /// Two-level status exposed by the API.
    #[must_use]
    pub fn status(&self) -> TrafficStatus {
        TrafficStatus::from_rate(self.traffic_rate)
    }

    /// Four-level band used by the dashboard.
    #[must_use]
    pub fn band(&self) -> TrafficBand {
        TrafficBand::classify(self.traffic_rate)
    }
}

/// A validated device submission that has not been stored yet.
///
/// Only obtainable through [`NewDevice::builder`], so every value of this
/// type satisfies the field invariants.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDevice {
    ip: String,
    name: String,
    traffic_rate: f64,
}

impl NewDevice {
    /// Create a builder from raw, unvalidated input.
    #[must_use]
    pub fn builder() -> NewDeviceBuilder {
        NewDeviceBuilder::default()
    }

    #[must_use]
    pub fn ip(&self) -> &str {
        &self.ip
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn traffic_rate(&self) -> f64 {
        self.traffic_rate
    }

    /// Attach the storage-assigned id.
    #[must_use]
    pub fn into_device(self, id: DeviceId) -> Device {
        Device {
            id,
            ip: self.ip,
            name: self.name,
            traffic_rate: self.traffic_rate,
        }
    }
}

/// Collects raw text fields and validates them in one go.
#[derive(Debug, Default)]
pub struct NewDeviceBuilder {
    ip: Option<String>,
    name: Option<String>,
    traffic_rate: Option<String>,
}

impl NewDeviceBuilder {
    #[must_use]
    pub fn ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Traffic rate as text, e.g. `"12.5"`.
    #[must_use]
    pub fn traffic_rate(mut self, traffic_rate: impl Into<String>) -> Self {
        self.traffic_rate = Some(traffic_rate.into());
        self
    }

    /// Consume the builder, validate, and return a [`NewDevice`].
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// presence of all fields, then the ip format, then the traffic rate.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingFields`] if any field is absent or empty
    /// - [`ValidationError::InvalidIp`] if `ip` is not a dotted quad with octets in `0..=255`
    /// - [`ValidationError::InvalidTrafficRate`] if the rate is not a finite number `>= 0`
    pub fn build(self) -> Result<NewDevice, ValidationError> {
        let (Some(ip), Some(name), Some(rate)) = (self.ip, self.name, self.traffic_rate) else {
            return Err(ValidationError::MissingFields);
        };
        if ip.is_empty() || name.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !is_dotted_quad(&ip) {
            return Err(ValidationError::InvalidIp);
        }
        let traffic_rate = parse_traffic_rate(&rate)?;

        Ok(NewDevice {
            ip,
            name,
            traffic_rate,
        })
    }
}

/// `true` when `ip` has exactly four dot-separated decimal octets in `0..=255`.
///
/// Leading zeros are accepted (`010.0.0.1`).
#[must_use]
pub fn is_dotted_quad(ip: &str) -> bool {
    let octets: Vec<&str> = ip.split('.').collect();
    octets.len() == 4
        && octets.iter().all(|octet| {
            !octet.is_empty()
                && octet.bytes().all(|b| b.is_ascii_digit())
                && octet.parse::<u32>().is_ok_and(|value| value <= 255)
        })
}

fn parse_traffic_rate(raw: &str) -> Result<f64, ValidationError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidTrafficRate)?;
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidTrafficRate);
    }
    // `-0` passes the sign check; store it as `0`.
    Ok(value.abs())
}
