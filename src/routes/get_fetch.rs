use crate::{
    services::network_client::types::network_response::HttpResponse,
    types::app_state::AppState,
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetFetchPayload {
    #[validate(url(message = "Must be a valid URL"))]
    pub url: String,
}

#[derive(Serialize, Deserialize)]
pub struct FetchResponse {
    pub data: HttpResponse,
}

pub async fn get_fetch(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetFetchPayload>,
) -> Result<Response, AppError> {
    let data = state
        .network_service
        .fetch_get(&payload.url)
        .await
        .map_err(|e| {
            error!("Failed to fetch {}: {}", payload.url, e);
            AppError::from(e)
        })?;

    Ok((StatusCode::OK, Json(FetchResponse { data })).into_response())
}
