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
pub async fn get_routes(State(state): State<AppState>) -> Result<Response, AppError> {
    let routes = state.metro_service.list_routes().await.map_err(|e| {
        error!("Failed to fetch routes: {}", e);
        AppError::from(e)
    })?;

    Ok((StatusCode::OK, Json(routes)).into_response())
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
            .mock("GET", "/NexTrip/Routes")
            .with_header("content-type", "application/json")
            .with_body(
                json!([{
                    "Description": "METRO Blue Line",
                    "ProviderID": "8",
                    "Route": "901"
                }])
                .to_string(),
            )
            .match_query(mockito::Matcher::UrlEncoded(
                "format".to_string(),
                "json".to_string(),
            ))
            .create_async()
            .await;

        let response = app
            .oneshot(Request::builder().uri("/routes").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        mock_server.assert_async().await;

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(
            body,
            json!([{
                "description": "METRO Blue Line",
                "providerId": "8",
                "route": "901"
            }])
        );
    }

    #[tokio::test]
    async fn test_unexpected_body() {
        let mut mock_server = mockito::Server::new_async().await;

        let app = gen_app(AppConfig::for_testing(mock_server.url())).unwrap();

        let _mock = mock_server
            .mock("GET", "/NexTrip/Routes")
            .with_header("content-type", "text/html")
            .with_body("<html>Service Unavailable</html>")
            .match_query(mockito::Matcher::Any)
            .create_async()
            .await;

        let response = app
            .oneshot(Request::builder().uri("/routes").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["message"], "Internal Server Error");
    }
}
