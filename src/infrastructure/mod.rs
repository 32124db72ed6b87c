// Infrastructure layer - External dependencies and adapters
pub mod api_model;
pub mod config;
pub mod system_rng;
