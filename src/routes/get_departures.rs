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

#[cfg_attr(test, debug_handler)]
pub async fn get_departures(
    State(state): State<AppState>,
    Path(stop): Path<u32>,
) -> Result<Response, AppError> {
    let departures = state
        .metro_service
        .list_departures(stop)
        .await
        .map_err(|e| {
            error!("Failed to fetch departures for stop {}: {}", stop, e);
            AppError::from(e)
        })?;

    Ok((StatusCode::OK, Json(departures)).into_response())
}
