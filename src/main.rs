use geo_bridge::app::{self, AppConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    info!("Starting bridge on {}...", config.bind_addr);

    let listener = match tokio::net::TcpListener::bind(&config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", config.bind_addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app::gen_app(config)).await {
        error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}
