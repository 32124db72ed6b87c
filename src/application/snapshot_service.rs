// Snapshot service - Use case for building and refreshing the dashboard
use crate::application::metric_generator::{GeneratorError, MetricGenerator};
use crate::domain::alert::{Alert, AlertSeverity};
use crate::domain::dashboard::DashboardSnapshot;
use crate::domain::metrics::{CompositeMetric, PlantConditions};
use crate::infrastructure::config::GeneratorConfig;
use chrono::Utc;
use tokio::sync::RwLock;

/// Owns the current dashboard snapshot. Readers get a clone; a refresh
/// builds a complete new snapshot and swaps it in one write. There is no
/// partial-update path, so a failed refresh leaves the previous snapshot
/// current.
pub struct SnapshotService {
    generator: MetricGenerator,
    config: GeneratorConfig,
    current: RwLock<DashboardSnapshot>,
}

impl SnapshotService {
    /// Build the service with its construction-time snapshot: freshly
    /// generated series next to nominal scalar readings. Invalid generator
    /// parameters are rejected here, before the service ever serves.
    pub fn new(
        generator: MetricGenerator,
        config: GeneratorConfig,
    ) -> Result<Self, GeneratorError> {
        let production = generator.generate_series(
            config.production.count,
            config.production.min,
            config.production.max,
        )?;
        let energy =
            generator.generate_series(config.energy.count, config.energy.min, config.energy.max)?;
        let production_trend =
            generator.generate_trend(config.trend.days, config.trend.base, config.trend.target)?;

        let initial = DashboardSnapshot::new(
            production,
            energy,
            production_trend,
            CompositeMetric::new(92.0, 88.0, 95.0),
            PlantConditions::new(2.3, 23.5, 45.0),
            Self::seed_alerts(),
            Utc::now(),
        );

        Ok(Self {
            generator,
            config,
            current: RwLock::new(initial),
        })
    }

    pub async fn snapshot(&self) -> DashboardSnapshot {
        self.current.read().await.clone()
    }

    /// Regenerate every dataset and swap the snapshot wholesale.
    pub async fn refresh(&self) -> Result<DashboardSnapshot, GeneratorError> {
        let production = self.generator.generate_series(
            self.config.production.count,
            self.config.production.min,
            self.config.production.max,
        )?;
        let energy = self.generator.generate_series(
            self.config.energy.count,
            self.config.energy.min,
            self.config.energy.max,
        )?;
        let production_trend = self.generator.generate_trend(
            self.config.trend.days,
            self.config.trend.base,
            self.config.trend.target,
        )?;

        let next = DashboardSnapshot::new(
            production,
            energy,
            production_trend,
            self.generator.sample_oee(),
            self.generator.sample_conditions(),
            Self::seed_alerts(),
            Utc::now(),
        );

        let mut current = self.current.write().await;
        *current = next.clone();
        tracing::debug!(
            "dashboard snapshot refreshed: {} production points, {} energy points",
            next.production.len(),
            next.energy.len()
        );
        Ok(next)
    }

    fn seed_alerts() -> Vec<Alert> {
        vec![
            Alert::new(
                1,
                AlertSeverity::Critical,
                "Machine #3 requiring maintenance".to_string(),
                "2 min ago".to_string(),
            ),
            Alert::new(
                2,
                AlertSeverity::Warning,
                "Energy consumption above threshold".to_string(),
                "15 min ago".to_string(),
            ),
            Alert::new(
                3,
                AlertSeverity::Info,
                "Production quota reached".to_string(),
                "1 hour ago".to_string(),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::{SeriesConfig, TrendConfig};
    use crate::infrastructure::system_rng::SeededRng;
    use std::sync::Arc;

    fn test_config() -> GeneratorConfig {
        GeneratorConfig {
            seed: Some(9),
            production: SeriesConfig {
                count: 24,
                min: 80,
                max: 120,
            },
            energy: SeriesConfig {
                count: 24,
                min: 100,
                max: 500,
            },
            trend: TrendConfig {
                days: 30,
                base: 1000,
                target: 1400,
            },
        }
    }

    fn test_service() -> SnapshotService {
        let generator = MetricGenerator::new(Arc::new(SeededRng::new(9)));
        SnapshotService::new(generator, test_config()).unwrap()
    }

    #[test]
    fn test_initial_snapshot_uses_nominal_scalars() {
        let service = test_service();
        let snapshot = service.current.try_read().unwrap();

        assert_eq!(snapshot.oee, CompositeMetric::new(92.0, 88.0, 95.0));
        assert_eq!(snapshot.conditions.defect_rate, 2.3);
        assert_eq!(snapshot.conditions.temperature, 23.5);
        assert_eq!(snapshot.conditions.humidity, 45.0);
        assert_eq!(snapshot.alerts.len(), 3);
        assert_eq!(snapshot.production.len(), 24);
        assert_eq!(snapshot.energy.len(), 24);
        assert_eq!(snapshot.production_trend.len(), 30);
    }

    #[test]
    fn test_invalid_config_is_rejected_at_construction() {
        let generator = MetricGenerator::new(Arc::new(SeededRng::new(9)));
        let mut config = test_config();
        config.production.min = 150;

        let result = SnapshotService::new(generator, config);
        assert!(matches!(
            result,
            Err(GeneratorError::InvalidRange { min: 150, max: 120 })
        ));
    }

    #[tokio::test]
    async fn test_refresh_replaces_the_snapshot_wholesale() {
        let service = test_service();
        let before = service.snapshot().await;

        let after = service.refresh().await.unwrap();
        assert!(after.generated_at >= before.generated_at);
        assert!(after.oee.availability >= 85.0 && after.oee.availability <= 99.0);
        assert!(after.oee.quality >= 90.0 && after.oee.quality <= 99.0);
        for point in &after.production {
            assert!(point.value >= 80.0 && point.value <= 120.0);
        }

        // The clone handed to the caller matches what the service now holds.
        let current = service.snapshot().await;
        assert_eq!(current.oee, after.oee);
        assert_eq!(current.production, after.production);

        // The earlier snapshot is untouched by the swap.
        assert_eq!(before.oee, CompositeMetric::new(92.0, 88.0, 95.0));
    }
}
