//! Bridges a host application to a handful of outside capabilities: plain
//! HTTP fetches, Nominatim place search, H3 cell indexing and a debounce
//! timer. The same operations are served over HTTP by [`app::gen_app`].

pub mod app;
pub mod middlewares;
pub mod routes;
pub mod services;
pub mod types;
pub mod utils;

pub use services::{
    cell_indexer::h3_indexer::{lat_lon_to_h3, CellIndexer, H3Indexer},
    location_client::{
        location_service::{LocationSearch, LocationService, LocationServiceConfig},
        types::search_hit::SearchHit,
    },
    network_client::{network_service::NetworkService, types::network_response::HttpResponse},
};
pub use types::bridge_error::BridgeError;
pub use utils::debounce::{debounce, CancelHandle, Debouncer, KeyedDebouncer};
