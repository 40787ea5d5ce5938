//! VehicleDetailsService trait - the core abstraction for lookup backends

use async_trait::async_trait;

use crate::error::{ServiceError, ServiceResult};
use crate::models::{VehicleDetails, VehicleIdentificationNumber};

/// The capability the web layer depends on for vehicle data lookup.
///
/// Implementations resolve an opaque user identifier to the details of the
/// vehicle registered for that user. Backends can leave default
/// implementations for features they don't support.
#[async_trait]
pub trait VehicleDetailsService: Send + Sync {
    /// Look up the details of the vehicle registered for `user_id`
    async fn vehicle_details(&self, user_id: &str) -> ServiceResult<VehicleDetails>;

    /// Look up the VIN registered for `user_id` (if supported)
    async fn vehicle_vin(&self, user_id: &str) -> ServiceResult<VehicleIdentificationNumber> {
        let _ = user_id;
        Err(ServiceError::NotSupported("vehicle_vin"))
    }
}
