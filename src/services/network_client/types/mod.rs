pub mod network_response;
