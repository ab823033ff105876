pub mod cell_indexer;
pub mod location_client;
pub mod network_client;
