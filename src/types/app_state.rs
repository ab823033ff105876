use std::sync::Arc;

use crate::services::{
    cell_indexer::h3_indexer::CellIndexer, location_client::location_service::LocationSearch,
    network_client::network_service::NetworkService,
};

#[derive(Clone)]
pub struct AppState {
    pub network_service: NetworkService,
    pub location_search: Arc<dyn LocationSearch>,
    pub cell_indexer: Arc<dyn CellIndexer>,
    pub auth_key: Option<String>,
}
