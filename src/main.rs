// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::application::catalog_service::CatalogService;
use crate::application::metric_generator::MetricGenerator;
use crate::application::noise_source::NoiseSource;
use crate::application::snapshot_service::SnapshotService;
use crate::infrastructure::config::{load_generator_config, load_server_config};
use crate::infrastructure::system_rng::{SeededRng, SystemRng};
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_dashboard, health_check, list_insights, list_inventory, list_machines, list_workforce,
    refresh_dashboard,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let server_config = load_server_config()?;
    let generator_config = load_generator_config()?;

    // Create noise source (infrastructure layer); a configured seed makes
    // every generated dashboard reproducible
    let noise: Arc<dyn NoiseSource> = match generator_config.seed {
        Some(seed) => {
            tracing::info!("using seeded noise source (seed {})", seed);
            Arc::new(SeededRng::new(seed))
        }
        None => Arc::new(SystemRng::new()),
    };

    // Create services (application layer)
    let generator = MetricGenerator::new(noise);
    let snapshot_service = SnapshotService::new(generator, generator_config)
        .context("generator configuration rejected")?;
    let catalog_service = CatalogService::new();

    // Create application state
    let state = Arc::new(AppState {
        snapshot_service,
        catalog_service,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/refresh", post(refresh_dashboard))
        .route("/machines", get(list_machines))
        .route("/inventory", get(list_inventory))
        .route("/workforce", get(list_workforce))
        .route("/insights", get(list_insights))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = server_config
        .server
        .listen
        .parse()
        .context("invalid listen address")?;
    tracing::info!("starting factory-telemetry service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
