//! vehicle-api - HTTP layer for the user vehicle lookup service
//!
//! This crate provides the REST routes that use the `VehicleDetailsService`
//! trait to serve vehicle lookups. It is backend-agnostic.
//!
//! # Usage
//!
//! ```ignore
//! use vehicle_api::{create_router, AppState};
//! use vehicle_store::StaticVehicleService;
//!
//! let service = StaticVehicleService::from_config(config)?;
//! let state = AppState::new(Arc::new(service));
//! let router = create_router(state);
//! ```

pub mod error;
pub mod handlers;
pub mod state;
pub mod testing;

pub use error::ApiError;
pub use state::AppState;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the REST router with the given application state
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Vehicle routes
        .route("/{user_id}/vehicle", get(handlers::vehicle::get_vehicle))
        .route(
            "/{user_id}/vehicle/vin",
            get(handlers::vehicle::get_vehicle_vin),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
