//! Inventory-wide traffic figures for the dashboard.

use std::collections::BTreeMap;

use crate::device::Device;
use crate::status::{HIGH_TRAFFIC_MBPS, TrafficBand};

/// Aggregates computed over a snapshot of all devices.
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficSummary {
    pub total_devices: usize,
    /// Mean rate in Mbps, `0.0` when there are no devices.
    pub average_traffic: f64,
    /// Devices at or above [`HIGH_TRAFFIC_MBPS`].
    pub high_traffic_devices: usize,
    /// Count per band, always all four bands lowest first.
    pub distribution: Vec<(TrafficBand, usize)>,
    /// Summed rate per device name, sorted by name.
    pub traffic_by_name: Vec<(String, f64)>,
}

impl TrafficSummary {
    /// Summarise a list of devices.
    #[must_use]
    pub fn from_devices(devices: &[Device]) -> Self {
        let total_devices = devices.len();
        let total_traffic: f64 = devices.iter().map(|d| d.traffic_rate).sum();
        #[allow(clippy::cast_precision_loss)]
        let average_traffic = if total_devices == 0 {
            0.0
        } else {
            total_traffic / total_devices as f64
        };

        let high_traffic_devices = devices
            .iter()
            .filter(|d| d.traffic_rate >= HIGH_TRAFFIC_MBPS)
            .count();

        let mut counts: BTreeMap<TrafficBand, usize> = BTreeMap::new();
        for device in devices {
            *counts.entry(device.band()).or_default() += 1;
        }
        let distribution = TrafficBand::ALL
            .iter()
            .map(|band| (*band, counts.get(band).copied().unwrap_or(0)))
            .collect();

        let mut by_name: BTreeMap<&str, f64> = BTreeMap::new();
        for device in devices {
            *by_name.entry(device.name.as_str()).or_default() += device.traffic_rate;
        }
        let traffic_by_name = by_name
            .into_iter()
            .map(|(name, rate)| (name.to_string(), rate))
            .collect();

        Self {
            total_devices,
            average_traffic,
            high_traffic_devices,
            distribution,
            traffic_by_name,
        }
    }
}
