use std::error::Error;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Query, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::app_error::AppError;

/// Query string extractor that runs `validator` rules before the handler.
pub struct ValidatedQuery<T>(pub T);

/// JSON body counterpart of [`ValidatedQuery`].
pub struct ValidatedJson<T>(pub T);

fn validate<T: Validate>(data: T, what: &str) -> Result<T, AppError> {
    data.validate()
        .map_err(|e| AppError::bad_request(format!("Invalid {}: {}", what, e).as_str()))?;

    Ok(data)
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request(req, state)
            .await
            .map_err(|e| match e.source() {
                Some(source) => {
                    AppError::bad_request(format!("Invalid query: {}", source).as_str())
                }
                None => AppError::bad_request(e.body_text().as_str()),
            })?;

        validate(data, "query").map(ValidatedQuery)
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| AppError::bad_request(e.body_text().as_str()))?;

        validate(data, "body").map(ValidatedJson)
    }
}
