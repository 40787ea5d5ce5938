//! Application state for the vehicle API

use std::sync::Arc;

use vehicle_core::VehicleDetailsService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// The lookup backend behind the vehicle routes
    service: Arc<dyn VehicleDetailsService>,
}

impl AppState {
    /// Create a new AppState with the given lookup backend
    pub fn new(service: Arc<dyn VehicleDetailsService>) -> Self {
        Self { service }
    }

    /// Get the lookup backend
    pub fn service(&self) -> &Arc<dyn VehicleDetailsService> {
        &self.service
    }
}
