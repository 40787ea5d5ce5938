//! Common error types for vehicle lookup backends

use thiserror::Error;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors that can occur while looking up vehicle details
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No vehicle is registered for this user
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// A VIN is registered for the user, but no vehicle record exists for it
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    /// Operation not supported by this backend
    #[error("Operation not supported: {0}")]
    NotSupported(&'static str),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::UserNotFound(_) => 404,
            ServiceError::VehicleNotFound(_) => 404,
            ServiceError::NotSupported(_) => 501,
            ServiceError::Internal(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_http_semantics() {
        assert_eq!(ServiceError::UserNotFound("sboot".into()).status_code(), 404);
        assert_eq!(ServiceError::VehicleNotFound("vin".into()).status_code(), 404);
        assert_eq!(ServiceError::NotSupported("vehicle_vin").status_code(), 501);
        assert_eq!(ServiceError::Internal("boom".into()).status_code(), 500);
    }
}
