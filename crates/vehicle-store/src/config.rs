//! Registry configuration types (TOML)
//!
//! ```toml
//! [[users]]
//! user_id = "sboot"
//! vin = "01234567890123456"
//!
//! [[vehicles]]
//! vin = "01234567890123456"
//! make = "Honda"
//! model = "Civic"
//! ```

use serde::Deserialize;

use vehicle_core::VehicleIdentificationNumber;

/// Registry contents: which users exist and which vehicles they own
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// User id -> VIN assignments
    #[serde(default)]
    pub users: Vec<UserEntry>,
    /// Vehicle records keyed by VIN
    #[serde(default)]
    pub vehicles: Vec<VehicleEntry>,
}

/// One user id -> VIN assignment
#[derive(Debug, Clone, Deserialize)]
pub struct UserEntry {
    pub user_id: String,
    pub vin: VehicleIdentificationNumber,
}

/// One vehicle record
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleEntry {
    pub vin: VehicleIdentificationNumber,
    pub make: String,
    pub model: String,
}
