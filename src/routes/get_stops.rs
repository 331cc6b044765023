use crate::{types::app_state::AppState, utils::app_error::AppError};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

pub async fn get_stops(
    State(state): State<AppState>,
    Path((route, direction)): Path<(u32, u32)>,
) -> Result<Response, AppError> {
    let stops = state
        .metro_service
        .list_stops(route, direction)
        .await
        .map_err(|e| {
            error!(
                "Failed to fetch stops for route {} direction {}: {}",
                route, direction, e
            );
            AppError::from(e)
        })?;

    Ok((StatusCode::OK, Json(stops)).into_response())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::app::{gen_app, AppConfig};

    #[tokio::test]
    async fn get_response() {
        let mut mock_server = mockito::Server::new_async().await;

        let app = gen_app(AppConfig::for_testing(mock_server.url())).unwrap();

        let mock_server = mock_server
            .mock("GET", "/NexTrip/Stops/5/4")
            .with_header("content-type", "application/json")
            .with_body(
                json!([
                    { "Text": "Mall of America Transit Station", "Value": "MAAM" },
                    { "Text": "Chicago Ave and Lake St", "Value": "CHLA" }
                ])
                .to_string(),
            )
            .match_query(mockito::Matcher::UrlEncoded(
                "format".to_string(),
                "json".to_string(),
            ))
            .create_async()
            .await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/stops/5/4")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        mock_server.assert_async().await;

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(body.as_array().map(Vec::len), Some(2));
        assert_eq!(body[1]["text"], "Chicago Ave and Lake St");
        assert_eq!(body[1]["value"], "CHLA");
    }

    #[tokio::test]
    async fn test_unknown_direction_passes_through() {
        let mut mock_server = mockito::Server::new_async().await;

        let app = gen_app(AppConfig::for_testing(mock_server.url())).unwrap();

        // The upstream decides what an unknown direction means.
        let mock_server = mock_server
            .mock("GET", "/NexTrip/Stops/5/9")
            .with_status(400)
            .match_query(mockito::Matcher::Any)
            .create_async()
            .await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/stops/5/9")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        mock_server.assert_async().await;
    }
}
