//! Domain types for the user vehicle lookup service

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Details of a vehicle registered to a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleDetails {
    /// Manufacturer, e.g. "Honda"
    pub make: String,
    /// Model name, e.g. "Civic"
    pub model: String,
}

impl VehicleDetails {
    pub fn new(make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
        }
    }
}

impl fmt::Display for VehicleDetails {
    /// Renders as `<make> <model>` with a single space separator. This is
    /// the exact plain-text wire format of `GET /{user_id}/vehicle`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.make, self.model)
    }
}

/// A rejected VIN string
#[derive(Debug, Error)]
#[error("Invalid VIN: {0}")]
pub struct InvalidVin(pub String);

/// Vehicle Identification Number per ISO 3779: exactly 17 characters,
/// digits and uppercase letters except I, O and Q.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VehicleIdentificationNumber(String);

impl VehicleIdentificationNumber {
    pub fn new(vin: impl Into<String>) -> Result<Self, InvalidVin> {
        let vin = vin.into();
        if vin.len() != 17 {
            return Err(InvalidVin(vin));
        }
        let valid = vin
            .chars()
            .all(|c| c.is_ascii_digit() || (c.is_ascii_uppercase() && !matches!(c, 'I' | 'O' | 'Q')));
        if !valid {
            return Err(InvalidVin(vin));
        }
        Ok(Self(vin))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VehicleIdentificationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for VehicleIdentificationNumber {
    type Error = InvalidVin;

    fn try_from(vin: String) -> Result<Self, Self::Error> {
        Self::new(vin)
    }
}

impl From<VehicleIdentificationNumber> for String {
    fn from(vin: VehicleIdentificationNumber) -> Self {
        vin.0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn details_render_with_single_space() {
        let details = VehicleDetails::new("Honda", "Civic");
        assert_eq!(details.to_string(), "Honda Civic");
    }

    #[test]
    fn details_rendering_preserves_casing() {
        let details = VehicleDetails::new("BMW", "i3");
        assert_eq!(details.to_string(), "BMW i3");
    }

    #[test]
    fn vin_accepts_seventeen_valid_characters() {
        let vin = VehicleIdentificationNumber::new("WF0XXXGCDX1234567").unwrap();
        assert_eq!(vin.as_str(), "WF0XXXGCDX1234567");
    }

    #[test]
    fn vin_rejects_wrong_length() {
        assert!(VehicleIdentificationNumber::new("WF0XXX").is_err());
        assert!(VehicleIdentificationNumber::new("WF0XXXGCDX12345678").is_err());
    }

    #[test]
    fn vin_rejects_forbidden_letters() {
        // I, O and Q are excluded to avoid confusion with 1 and 0
        assert!(VehicleIdentificationNumber::new("WF0XXXGCDX123456I").is_err());
        assert!(VehicleIdentificationNumber::new("WF0XXXGCDX123456O").is_err());
        assert!(VehicleIdentificationNumber::new("WF0XXXGCDX123456Q").is_err());
    }

    #[test]
    fn vin_rejects_lowercase() {
        assert!(VehicleIdentificationNumber::new("wf0xxxgcdx1234567").is_err());
    }

    #[test]
    fn vin_deserializes_from_plain_string() {
        let vin: VehicleIdentificationNumber =
            serde_json::from_str("\"WF0XXXGCDX1234567\"").unwrap();
        assert_eq!(vin.as_str(), "WF0XXXGCDX1234567");
        assert!(serde_json::from_str::<VehicleIdentificationNumber>("\"nope\"").is_err());
    }
}
