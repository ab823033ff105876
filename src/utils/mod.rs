pub mod app_error;
pub mod debounce;
pub mod validated_query;
