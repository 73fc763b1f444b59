//! Traffic classification derived from a device's rate at read time.
//!
//! Two independent schemes exist and are deliberately kept apart:
//! [`TrafficStatus`] is part of the JSON API contract, [`TrafficBand`] is a
//! finer split used only for display.

use std::fmt;

use serde::Serialize;

/// Rate (Mbps) at or above which a device counts as busy.
pub const HIGH_TRAFFIC_MBPS: f64 = 50.0;

/// Two-level status reported by the JSON API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrafficStatus {
    Normal,
    Alto,
}

impl TrafficStatus {
    /// Classify a traffic rate.
    #[must_use]
    pub fn from_rate(traffic_rate: f64) -> Self {
        if traffic_rate >= HIGH_TRAFFIC_MBPS {
            Self::Alto
        } else {
            Self::Normal
        }
    }

    /// Wire representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Alto => "Alto",
        }
    }
}

impl fmt::Display for TrafficStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Four-level band shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TrafficBand {
    VeryLow,
    Low,
    Normal,
    High,
}

impl TrafficBand {
    /// All bands, lowest first.
    pub const ALL: [Self; 4] = [Self::VeryLow, Self::Low, Self::Normal, Self::High];

    /// Classify a traffic rate.
    #[must_use]
    pub fn classify(traffic_rate: f64) -> Self {
        if traffic_rate < 5.0 {
            Self::VeryLow
        } else if traffic_rate < 10.0 {
            Self::Low
        } else if traffic_rate < HIGH_TRAFFIC_MBPS {
            Self::Normal
        } else {
            Self::High
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Normal => "Normal",
            Self::High => "High",
        }
    }

    /// Stable CSS class suffix.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::VeryLow => "very-low",
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
        }
    }
}

impl fmt::Display for TrafficBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_normal_just_below_threshold() {
        assert_eq!(TrafficStatus::from_rate(49.9), TrafficStatus::Normal);
    }

    #[test]
    fn should_report_alto_at_threshold() {
        assert_eq!(TrafficStatus::from_rate(50.0), TrafficStatus::Alto);
        assert_eq!(TrafficStatus::from_rate(900.0), TrafficStatus::Alto);
    }

    #[test]
    fn should_report_normal_for_idle_device() {
        assert_eq!(TrafficStatus::from_rate(0.0), TrafficStatus::Normal);
    }

    #[test]
    fn should_serialize_status_as_plain_string() {
        let json = serde_json::to_string(&TrafficStatus::Alto).unwrap();
        assert_eq!(json, r#""Alto""#);
    }

    #[test]
    fn should_classify_band_boundaries() {
        assert_eq!(TrafficBand::classify(0.0), TrafficBand::VeryLow);
        assert_eq!(TrafficBand::classify(4.99), TrafficBand::VeryLow);
        assert_eq!(TrafficBand::classify(5.0), TrafficBand::Low);
        assert_eq!(TrafficBand::classify(9.99), TrafficBand::Low);
        assert_eq!(TrafficBand::classify(10.0), TrafficBand::Normal);
        assert_eq!(TrafficBand::classify(49.9), TrafficBand::Normal);
        assert_eq!(TrafficBand::classify(50.0), TrafficBand::High);
    }

    #[test]
    fn should_keep_band_and_status_independent_below_ten() {
        // Very Low on the dashboard, still Normal on the API.
        assert_eq!(TrafficBand::classify(2.0), TrafficBand::VeryLow);
        assert_eq!(TrafficStatus::from_rate(2.0), TrafficStatus::Normal);
    }
}
