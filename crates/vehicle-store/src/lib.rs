//! vehicle-store - In-memory vehicle registry backend
//!
//! Provides `StaticVehicleService`, a `VehicleDetailsService` implementation
//! backed by two maps: user id -> VIN, and VIN -> vehicle record. The maps
//! are populated from TOML configuration (see [`config::StoreConfig`]) or
//! from the built-in demo data set.

pub mod config;

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

use vehicle_core::{
    ServiceError, ServiceResult, VehicleDetails, VehicleDetailsService, VehicleIdentificationNumber,
};

use crate::config::StoreConfig;

/// Errors that can occur while building a registry from configuration
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    InvalidVin(#[from] vehicle_core::InvalidVin),

    #[error("Duplicate user entry: {0}")]
    DuplicateUser(String),

    #[error("Duplicate vehicle entry: {0}")]
    DuplicateVehicle(String),
}

/// In-memory implementation of `VehicleDetailsService`
#[derive(Debug)]
pub struct StaticVehicleService {
    users: HashMap<String, VehicleIdentificationNumber>,
    vehicles: HashMap<VehicleIdentificationNumber, VehicleDetails>,
}

impl StaticVehicleService {
    /// Build a registry from parsed configuration
    pub fn from_config(config: StoreConfig) -> Result<Self, StoreError> {
        let mut users = HashMap::new();
        for entry in config.users {
            if users.insert(entry.user_id.clone(), entry.vin).is_some() {
                return Err(StoreError::DuplicateUser(entry.user_id));
            }
        }

        let mut vehicles = HashMap::new();
        for entry in config.vehicles {
            let details = VehicleDetails::new(entry.make, entry.model);
            if vehicles.insert(entry.vin.clone(), details).is_some() {
                return Err(StoreError::DuplicateVehicle(entry.vin.to_string()));
            }
        }

        tracing::info!(
            users = users.len(),
            vehicles = vehicles.len(),
            "vehicle registry loaded"
        );

        Ok(Self { users, vehicles })
    }

    /// Built-in demo data set, used when the daemon runs without a config file
    pub fn demo() -> Self {
        Self::from_config(demo_config()).expect("demo data set is valid")
    }

    /// Number of registered users
    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

fn demo_config() -> StoreConfig {
    use crate::config::{UserEntry, VehicleEntry};

    let vin = VehicleIdentificationNumber::new("01234567890123456").expect("demo VIN is valid");
    StoreConfig {
        users: vec![UserEntry {
            user_id: "sboot".to_string(),
            vin: vin.clone(),
        }],
        vehicles: vec![VehicleEntry {
            vin,
            make: "Honda".to_string(),
            model: "Civic".to_string(),
        }],
    }
}

#[async_trait]
impl VehicleDetailsService for StaticVehicleService {
    async fn vehicle_details(&self, user_id: &str) -> ServiceResult<VehicleDetails> {
        let vin = self
            .users
            .get(user_id)
            .ok_or_else(|| ServiceError::UserNotFound(user_id.to_string()))?;
        self.vehicles
            .get(vin)
            .cloned()
            .ok_or_else(|| ServiceError::VehicleNotFound(vin.to_string()))
    }

    async fn vehicle_vin(&self, user_id: &str) -> ServiceResult<VehicleIdentificationNumber> {
        self.users
            .get(user_id)
            .cloned()
            .ok_or_else(|| ServiceError::UserNotFound(user_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn registry() -> StaticVehicleService {
        let config: StoreConfig = toml::from_str(
            r#"
            [[users]]
            user_id = "sboot"
            vin = "01234567890123456"

            [[users]]
            user_id = "mhunger"
            vin = "WF0XXXGCDX1234567"

            [[vehicles]]
            vin = "01234567890123456"
            make = "Honda"
            model = "Civic"
            "#,
        )
        .unwrap();
        StaticVehicleService::from_config(config).unwrap()
    }

    #[tokio::test]
    async fn resolves_user_to_vehicle_details() {
        let service = registry();
        let details = service.vehicle_details("sboot").await.unwrap();
        assert_eq!(details, VehicleDetails::new("Honda", "Civic"));
    }

    #[tokio::test]
    async fn resolves_user_to_vin() {
        let service = registry();
        let vin = service.vehicle_vin("sboot").await.unwrap();
        assert_eq!(vin.as_str(), "01234567890123456");
    }

    #[tokio::test]
    async fn unknown_user_is_reported_as_such() {
        let service = registry();
        let err = service.vehicle_details("nobody").await.unwrap_err();
        assert!(matches!(err, ServiceError::UserNotFound(id) if id == "nobody"));
    }

    #[tokio::test]
    async fn dangling_vin_is_reported_as_missing_vehicle() {
        // mhunger has a VIN but no vehicle record for it
        let service = registry();
        let err = service.vehicle_details("mhunger").await.unwrap_err();
        assert!(matches!(err, ServiceError::VehicleNotFound(_)));
    }

    #[test]
    fn duplicate_user_entries_are_rejected() {
        let config: StoreConfig = toml::from_str(
            r#"
            [[users]]
            user_id = "sboot"
            vin = "01234567890123456"

            [[users]]
            user_id = "sboot"
            vin = "WF0XXXGCDX1234567"
            "#,
        )
        .unwrap();
        let err = StaticVehicleService::from_config(config).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateUser(id) if id == "sboot"));
    }

    #[test]
    fn invalid_vin_fails_at_parse_time() {
        let result: Result<StoreConfig, _> = toml::from_str(
            r#"
            [[users]]
            user_id = "sboot"
            vin = "too-short"
            "#,
        );
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn demo_data_set_contains_the_documented_user() {
        let service = StaticVehicleService::demo();
        assert_eq!(service.user_count(), 1);
        let details = service.vehicle_details("sboot").await.unwrap();
        assert_eq!(details.to_string(), "Honda Civic");
    }
}
