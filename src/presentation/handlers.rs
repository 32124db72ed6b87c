// HTTP request handlers
use crate::infrastructure::api_model::{
    dashboard_to_wire, insights_to_wire, inventory_to_wire, machines_to_wire, workforce_to_wire,
};
use crate::presentation::app_state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Current dashboard snapshot
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.snapshot_service.snapshot().await;
    Json(dashboard_to_wire(snapshot))
}

/// Zero-argument refresh trigger: regenerate the snapshot wholesale and
/// return the new one. A rejected generation leaves the previous snapshot
/// in place.
pub async fn refresh_dashboard(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.snapshot_service.refresh().await {
        Ok(snapshot) => Json(dashboard_to_wire(snapshot)).into_response(),
        Err(e) => {
            tracing::warn!("dashboard refresh rejected: {}", e);
            (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response()
        }
    }
}

/// List all machines with derived status counts
pub async fn list_machines(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(machines_to_wire(state.catalog_service.list_machines()))
}

/// List inventory with low-stock flags
pub async fn list_inventory(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(inventory_to_wire(state.catalog_service.list_inventory()))
}

/// List workforce with the derived average efficiency
pub async fn list_workforce(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(workforce_to_wire(state.catalog_service.list_workforce()))
}

/// List canned analytics insights
pub async fn list_insights(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(insights_to_wire(state.catalog_service.list_insights()))
}
