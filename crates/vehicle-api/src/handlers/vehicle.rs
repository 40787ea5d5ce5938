//! Vehicle lookup handlers

use axum::extract::{Path, State};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /{user_id}/vehicle
/// Plain-text summary of the user's vehicle: `<make> <model>`
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<String, ApiError> {
    let details = state.service().vehicle_details(&user_id).await?;
    Ok(details.to_string())
}

/// GET /{user_id}/vehicle/vin
/// Plain-text VIN registered for the user
pub async fn get_vehicle_vin(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<String, ApiError> {
    let vin = state.service().vehicle_vin(&user_id).await?;
    Ok(vin.to_string())
}
