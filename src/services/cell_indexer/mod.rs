pub mod h3_indexer;
pub mod types;
