use crate::{types::app_state::AppState, utils::app_error::AppError};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use tracing::error;

/// Route `0` lists every vehicle in service.
#[cfg_attr(test, debug_handler)]
pub async fn get_vehicle_locations(
    State(state): State<AppState>,
    Path(route): Path<u32>,
) -> Result<Response, AppError> {
    let locations = state
        .metro_service
        .list_vehicle_locations(route)
        .await
        .map_err(|e| {
            error!("Failed to fetch vehicle locations for route {}: {}", route, e);
            AppError::from(e)
        })?;

    Ok((StatusCode::OK, Json(locations)).into_response())
}
