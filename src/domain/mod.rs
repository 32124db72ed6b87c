// Domain layer - Core models
pub mod alert;
pub mod dashboard;
pub mod factory;
pub mod metrics;
pub mod telemetry;
