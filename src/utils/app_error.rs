use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use crate::services::metro_client::types::metro_service_error::MetroServiceError;

#[derive(Debug)]
pub struct AppError {
    pub code: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(code: StatusCode, message: &str) -> Self {
        AppError {
            code,
            message: message.to_string(),
        }
    }
}

// Handlers log the detail; callers only see the reason phrase.
impl From<MetroServiceError> for AppError {
    fn from(e: MetroServiceError) -> Self {
        let code = match &e {
            _ if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            MetroServiceError::Transport(_) | MetroServiceError::Upstream { .. } => {
                StatusCode::BAD_GATEWAY
            }
            MetroServiceError::Decode(_)
            | MetroServiceError::MalformedTimestamp(_)
            | MetroServiceError::InvalidRecord(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        AppError::new(code, code.canonical_reason().unwrap_or("Internal Server Error"))
    }
}

#[derive(Serialize)]
struct ResponseJson {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response<Body> {
        (
            self.code,
            Json(ResponseJson {
                message: self.message,
            }),
        )
            .into_response()
    }
}
