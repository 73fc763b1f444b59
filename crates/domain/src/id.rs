//! Typed identifier newtypes backed by storage-assigned integers.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::Serialize;

/// Why a textual identifier could not be turned into a [`DeviceId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseIdError {
    #[error("identifier is not an integer")]
    NotAnInteger(#[from] ParseIntError),

    #[error("identifier must be positive")]
    NotPositive,
}

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw row id.
            #[must_use]
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Access the inner integer.
            #[must_use]
            pub fn as_i64(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value: i64 = s.parse()?;
                if value <= 0 {
                    return Err(ParseIdError::NotPositive);
                }
                Ok(Self(value))
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Device`](crate::device::Device).
    DeviceId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = DeviceId::new(17);
        let parsed: DeviceId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_as_bare_integer() {
        let json = serde_json::to_string(&DeviceId::new(3)).unwrap();
        assert_eq!(json, "3");
    }

    #[test]
    fn should_reject_zero_and_negative_ids() {
        assert_eq!(DeviceId::from_str("0"), Err(ParseIdError::NotPositive));
        assert_eq!(DeviceId::from_str("-4"), Err(ParseIdError::NotPositive));
    }

    #[test]
    fn should_return_error_when_parsing_non_integer() {
        assert!(matches!(
            DeviceId::from_str("abc"),
            Err(ParseIdError::NotAnInteger(_))
        ));
    }
}
