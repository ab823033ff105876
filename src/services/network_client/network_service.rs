use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use super::types::network_response::HttpResponse;
use crate::types::bridge_error::{message_or, BridgeError};

const NETWORK_ERROR: &str = "Network error";

/// Plain GET/POST bridge. Any HTTP response is a success; only transport
/// failures end up in the error arm.
#[derive(Clone, Default)]
pub struct NetworkService {
    client: reqwest::Client,
}

impl NetworkService {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub async fn fetch_get(&self, url: &str) -> Result<HttpResponse, BridgeError> {
        debug!("GET {}", url);

        let resp = self.client.get(url).send().await.map_err(network_error)?;

        read_response(resp).await
    }

    pub async fn fetch_post_json(
        &self,
        url: &str,
        json_body: &str,
    ) -> Result<HttpResponse, BridgeError> {
        debug!("POST {}", url);

        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(json_body.to_string())
            .send()
            .await
            .map_err(network_error)?;

        read_response(resp).await
    }
}

async fn read_response(resp: reqwest::Response) -> Result<HttpResponse, BridgeError> {
    let status = resp.status().as_u16();
    let body = resp.text().await.map_err(network_error)?;

    Ok(HttpResponse { status, body })
}

fn network_error(e: reqwest::Error) -> BridgeError {
    BridgeError::Network(message_or(e, NETWORK_ERROR))
}
