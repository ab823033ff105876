use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use tracing::{debug, error};
use urlencoding::encode;

use super::types::search_hit::SearchHit;
use crate::types::bridge_error::{message_or, BridgeError};

pub const NOMINATIM_HOST: &str = "https://nominatim.openstreetmap.org";

/// Nominatim's usage policy requires an identifying agent.
const NOMINATIM_USER_AGENT: &str = "lustre-fullstack-app/1.0";
const RESULT_LIMIT: u8 = 5;
const MIN_QUERY_CHARS: usize = 2;
const SEARCH_FAILED: &str = "Search failed";

/// Free-text place search. Queries shorter than two characters resolve to no
/// results without touching the network.
#[async_trait]
pub trait LocationSearch: Send + Sync {
    async fn search_locations(&self, query: Option<&str>) -> Result<Vec<SearchHit>, BridgeError>;
}

#[derive(Clone)]
pub struct LocationServiceConfig {
    pub host: String,
}

impl Default for LocationServiceConfig {
    fn default() -> Self {
        Self {
            host: NOMINATIM_HOST.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct LocationService {
    config: LocationServiceConfig,
    client: reqwest::Client,
}

impl LocationService {
    pub fn new(config: LocationServiceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    async fn fetch_hits(&self, query: &str) -> Result<Vec<SearchHit>, BridgeError> {
        let url = format!(
            "{}/search?format=json&q={}&limit={}&addressdetails=1",
            self.config.host.trim_end_matches('/'),
            encode(query),
            RESULT_LIMIT
        );

        debug!("Searching locations: {}", url);

        let resp = self
            .client
            .get(&url)
            .header(USER_AGENT, NOMINATIM_USER_AGENT)
            .send()
            .await
            .map_err(|e| BridgeError::Network(message_or(e, SEARCH_FAILED)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(BridgeError::Status(
                status
                    .canonical_reason()
                    .unwrap_or(SEARCH_FAILED)
                    .to_string(),
            ));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| BridgeError::Network(message_or(e, SEARCH_FAILED)))?;

        serde_json::from_str::<Vec<SearchHit>>(&body)
            .map_err(|e| BridgeError::Parse(message_or(e, SEARCH_FAILED)))
    }
}

#[async_trait]
impl LocationSearch for LocationService {
    async fn search_locations(&self, query: Option<&str>) -> Result<Vec<SearchHit>, BridgeError> {
        let query = match query.map(str::trim) {
            Some(q) if q.chars().count() >= MIN_QUERY_CHARS => q,
            _ => return Ok(Vec::new()),
        };

        self.fetch_hits(query).await.map_err(|e| {
            error!("Location search failed: {}", e);
            e
        })
    }
}
