// Application state for HTTP handlers
use crate::application::catalog_service::CatalogService;
use crate::application::snapshot_service::SnapshotService;

pub struct AppState {
    pub snapshot_service: SnapshotService,
    pub catalog_service: CatalogService,
}
