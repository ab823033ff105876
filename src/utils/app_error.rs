use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::types::bridge_error::BridgeError;

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

    pub fn bad_request(message: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

/// Upstream failures surface as 502 carrying the bridge's own message.
impl From<BridgeError> for AppError {
    fn from(e: BridgeError) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, e.message())
    }
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponseJson {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response<Body> {
        (
            self.code,
            Json(ErrorResponseJson {
                message: self.message,
            }),
        )
            .into_response()
    }
}
