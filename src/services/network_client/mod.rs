pub mod network_service;
pub mod types;
