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
pub async fn get_directions(
    State(state): State<AppState>,
    Path(route): Path<u32>,
) -> Result<Response, AppError> {
    let directions = state
        .metro_service
        .list_directions(route)
        .await
        .map_err(|e| {
            error!("Failed to fetch directions for route {}: {}", route, e);
            AppError::from(e)
        })?;

    Ok((StatusCode::OK, Json(directions)).into_response())
}
