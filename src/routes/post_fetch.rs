use crate::{
    routes::get_fetch::FetchResponse,
    types::app_state::AppState,
    utils::{app_error::AppError, validated_query::ValidatedJson},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::Deserialize;
use tracing::error;
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct PostFetchPayload {
    #[validate(url(message = "Must be a valid URL"))]
    pub url: String,

    /// Already-serialized JSON, forwarded as-is.
    pub body: String,
}

#[cfg_attr(test, debug_handler)]
pub async fn post_fetch(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PostFetchPayload>,
) -> Result<Response, AppError> {
    let data = state
        .network_service
        .fetch_post_json(&payload.url, &payload.body)
        .await
        .map_err(|e| {
            error!("Failed to post to {}: {}", payload.url, e);
            AppError::from(e)
        })?;

    Ok((StatusCode::OK, Json(FetchResponse { data })).into_response())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt;

    use super::*;
    use crate::app::gen_mock_app;

    #[tokio::test]
    async fn forwards_json_body() {
        let mut mock_app = gen_mock_app().await;

        let mock_server = mock_app
            .upstream_server
            .mock("POST", "/events")
            .match_header("content-type", "application/json")
            .match_body(r#"{"kind":"click"}"#)
            .with_status(202)
            .with_body("queued")
            .create_async()
            .await;

        let payload = json!({
            "url": format!("{}/events", mock_app.upstream_server.url()),
            "body": r#"{"kind":"click"}"#,
        });

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/fetch")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        mock_server.assert();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: FetchResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(body.data.status, 202);
        assert_eq!(body.data.body, "queued");
    }

    #[tokio::test]
    async fn rejects_missing_body_field() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/fetch")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"url":"http://localhost/"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
