use crate::{
    services::location_client::types::search_hit::SearchHit,
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
use validator::Validate;

/// Short or missing queries are not an error; they return no results.
#[derive(Validate, Deserialize)]
pub struct GetLocationSearchPayload {
    pub query: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct GetLocationSearchResponseData {
    pub results: Vec<SearchHit>,
}

#[derive(Serialize, Deserialize)]
pub struct GetLocationSearchResponse {
    pub data: GetLocationSearchResponseData,
}

pub async fn get_location_search(
    State(state): State<AppState>,
    ValidatedQuery(GetLocationSearchPayload { query }): ValidatedQuery<GetLocationSearchPayload>,
) -> Result<Response, AppError> {
    let results = state
        .location_search
        .search_locations(query.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(GetLocationSearchResponse {
            data: GetLocationSearchResponseData { results },
        }),
    )
        .into_response())
}
