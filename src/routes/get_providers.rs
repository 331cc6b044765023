use crate::{types::app_state::AppState, utils::app_error::AppError};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use tracing::error;

#[cfg_attr(test, debug_handler)]
pub async fn get_providers(State(state): State<AppState>) -> Result<Response, AppError> {
    let providers = state.metro_service.list_providers().await.map_err(|e| {
        error!("Failed to fetch providers: {}", e);
        AppError::from(e)
    })?;

    Ok((StatusCode::OK, Json(providers)).into_response())
}
