pub mod location_service;
pub mod types;
