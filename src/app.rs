use std::{env, sync::Arc};

use crate::{
    middlewares::auth::auth_middleware,
    routes::apply_routes,
    services::{
        cell_indexer::h3_indexer::H3Indexer,
        location_client::location_service::{LocationService, LocationServiceConfig, NOMINATIM_HOST},
        network_client::network_service::NetworkService,
    },
    types::app_state::AppState,
};
use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;
use tracing::warn;

/// Loopback only: without an auth key `/fetch` relays to any URL.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub nominatim_host: String,
    pub auth_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            nominatim_host: NOMINATIM_HOST.to_string(),
            auth_key: None,
        }
    }
}

impl AppConfig {
    /// Reads `BRIDGE_BIND_ADDR`, `BRIDGE_AUTH_KEY` and `NOMINATIM_HOST`,
    /// keeping defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            bind_addr: env::var("BRIDGE_BIND_ADDR").unwrap_or(defaults.bind_addr),
            nominatim_host: env::var("NOMINATIM_HOST").unwrap_or(defaults.nominatim_host),
            auth_key: env::var("BRIDGE_AUTH_KEY").ok().filter(|k| !k.is_empty()),
        }
    }
}

pub fn gen_app(config: AppConfig) -> Router {
    if config.auth_key.is_none() {
        warn!(
            "No BRIDGE_AUTH_KEY set; /fetch will relay requests for any client that can reach {}",
            config.bind_addr
        );
    }

    gen_app_with_state(AppState {
        network_service: NetworkService::new(),
        location_search: Arc::new(LocationService::new(LocationServiceConfig {
            host: config.nominatim_host,
        })),
        cell_indexer: Arc::new(H3Indexer),
        auth_key: config.auth_key,
    })
}

pub fn gen_app_with_state(state: AppState) -> Router {
    let cors_middleware = CorsLayer::new();

    apply_routes(Router::new())
        .route("/", get(root))
        .layer(cors_middleware)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .with_state(state)
}

async fn root() -> &'static str {
    "ok"
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub nominatim_server: mockito::ServerGuard,
    pub upstream_server: mockito::ServerGuard,
}

#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    gen_mock_app_with_key(None).await
}

#[cfg(test)]
pub async fn gen_mock_app_with_key(auth_key: Option<String>) -> MockApp {
    let nominatim_server = mockito::Server::new_async().await;
    let upstream_server = mockito::Server::new_async().await;

    let app = gen_app(AppConfig {
        nominatim_host: nominatim_server.url(),
        auth_key,
        ..AppConfig::default()
    });

    MockApp {
        app,
        nominatim_server,
        upstream_server,
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;
    use tracing_test::traced_test;

    use super::*;

    #[test]
    fn default_config_is_loopback_without_key() {
        let config = AppConfig::default();

        assert_eq!(config.bind_addr, "127.0.0.1:3000");
        assert!(config.auth_key.is_none());
    }

    #[tokio::test]
    #[traced_test]
    async fn warns_when_relay_is_open() {
        let _app = gen_app(AppConfig::default());

        assert!(logs_contain("No BRIDGE_AUTH_KEY set"));
    }

    #[tokio::test]
    #[traced_test]
    async fn no_warning_with_key() {
        let _app = gen_app(AppConfig {
            auth_key: Some("secret".to_string()),
            ..AppConfig::default()
        });

        assert!(!logs_contain("No BRIDGE_AUTH_KEY set"));
    }

    #[tokio::test]
    async fn root_responds() {
        let app = gen_app(AppConfig::default());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn requires_key_when_configured() {
        let mock_app = gen_mock_app_with_key(Some("secret".to_string())).await;

        let response = mock_app
            .app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("authorization", "secret")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
