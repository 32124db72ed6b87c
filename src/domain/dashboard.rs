// Dashboard snapshot domain model
use super::alert::Alert;
use super::metrics::{CompositeMetric, PlantConditions};
use super::telemetry::{TimeSeriesPoint, TrendPoint};
use chrono::{DateTime, Utc};

/// The complete set of currently displayed mock values. A snapshot is
/// immutable once built and replaced wholesale on refresh; readers may
/// keep a clone of the previous one across a transition.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub production: Vec<TimeSeriesPoint>,
    pub energy: Vec<TimeSeriesPoint>,
    pub production_trend: Vec<TrendPoint>,
    pub oee: CompositeMetric,
    pub conditions: PlantConditions,
    pub alerts: Vec<Alert>,
    pub generated_at: DateTime<Utc>,
}

impl DashboardSnapshot {
    pub fn new(
        production: Vec<TimeSeriesPoint>,
        energy: Vec<TimeSeriesPoint>,
        production_trend: Vec<TrendPoint>,
        oee: CompositeMetric,
        conditions: PlantConditions,
        alerts: Vec<Alert>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            production,
            energy,
            production_trend,
            oee,
            conditions,
            alerts,
            generated_at,
        }
    }
}
