// Application layer - Use cases
pub mod catalog_service;
pub mod metric_generator;
pub mod noise_source;
pub mod snapshot_service;
