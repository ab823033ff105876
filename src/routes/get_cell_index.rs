use crate::{
    services::cell_indexer::h3_indexer::DEFAULT_RESOLUTION,
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
pub struct GetCellIndexPayload {
    pub lat: f64,
    pub lon: f64,
    pub resolution: Option<u8>,
}

#[derive(Serialize, Deserialize)]
pub struct GetCellIndexResponseData {
    pub cell: String,
}

#[derive(Serialize, Deserialize)]
pub struct GetCellIndexResponse {
    pub data: GetCellIndexResponseData,
}

pub async fn get_cell_index(
    State(state): State<AppState>,
    ValidatedQuery(GetCellIndexPayload {
        lat,
        lon,
        resolution,
    }): ValidatedQuery<GetCellIndexPayload>,
) -> Result<Response, AppError> {
    let cell = state
        .cell_indexer
        .cell_index(lat, lon, resolution.unwrap_or(DEFAULT_RESOLUTION))
        .map_err(|e| {
            error!("Failed to index ({}, {}): {}", lat, lon, e);
            AppError::bad_request(e.to_string().as_str())
        })?;

    Ok((
        StatusCode::OK,
        Json(GetCellIndexResponse {
            data: GetCellIndexResponseData { cell },
        }),
    )
        .into_response())
}
