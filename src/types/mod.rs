pub mod app_state;
pub mod bridge_error;
