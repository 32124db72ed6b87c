// Metric generator - Use case for producing synthetic dashboard data
use crate::application::noise_source::NoiseSource;
use crate::domain::metrics::{CompositeMetric, PlantConditions};
use crate::domain::telemetry::{TimeSeriesPoint, TrendPoint};
use std::sync::Arc;
use thiserror::Error;

/// Upward spread applied to the trend baseline.
const TREND_SPREAD: i64 = 500;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("invalid range: min {min} exceeds max {max}")]
    InvalidRange { min: i64, max: i64 },
    #[error("invalid count {0}: must be positive")]
    InvalidCount(i64),
    #[error("invalid days {0}: must be positive")]
    InvalidDays(i64),
}

/// All randomness in the service flows through here; everything downstream
/// of the generator is a pure function of its output.
#[derive(Clone)]
pub struct MetricGenerator {
    noise: Arc<dyn NoiseSource>,
}

impl MetricGenerator {
    pub fn new(noise: Arc<dyn NoiseSource>) -> Self {
        Self { noise }
    }

    /// Produce `count` points labelled by hour of day, each value drawn
    /// uniformly from the inclusive integer range [min, max]. Every call
    /// returns a fresh sequence; previously returned sequences are never
    /// touched.
    pub fn generate_series(
        &self,
        count: i64,
        min: i64,
        max: i64,
    ) -> Result<Vec<TimeSeriesPoint>, GeneratorError> {
        if count <= 0 {
            return Err(GeneratorError::InvalidCount(count));
        }
        if min > max {
            return Err(GeneratorError::InvalidRange { min, max });
        }

        let points = (0..count)
            .map(|i| {
                TimeSeriesPoint::new(format!("{}:00", i), self.noise.next_in_range(min, max) as f64)
            })
            .collect();
        Ok(points)
    }

    /// Produce a `days`-long production trend: actual output perturbed
    /// upward from `base`, against a constant `target` line.
    pub fn generate_trend(
        &self,
        days: i64,
        base: i64,
        target: i64,
    ) -> Result<Vec<TrendPoint>, GeneratorError> {
        if days <= 0 {
            return Err(GeneratorError::InvalidDays(days));
        }

        let points = (0..days)
            .map(|i| {
                let actual = base + self.noise.next_in_range(0, TREND_SPREAD);
                TrendPoint::new(format!("Day {}", i + 1), actual as f64, target as f64)
            })
            .collect();
        Ok(points)
    }

    /// Sample fresh OEE sub-metrics within their operating bands.
    pub fn sample_oee(&self) -> CompositeMetric {
        CompositeMetric::new(
            self.noise.next_in_range(85, 99) as f64,
            self.noise.next_in_range(85, 99) as f64,
            self.noise.next_in_range(90, 99) as f64,
        )
    }

    /// Sample plant floor conditions. Temperature is kept at one decimal,
    /// matching the gauge it feeds.
    pub fn sample_conditions(&self) -> PlantConditions {
        let defect_rate = 1.0 + self.noise.next_unit() * 3.0;
        let temperature = ((20.0 + self.noise.next_unit() * 10.0) * 10.0).round() / 10.0;
        let humidity = self.noise.next_in_range(40, 69) as f64;
        PlantConditions::new(defect_rate, temperature, humidity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::system_rng::SeededRng;

    fn seeded_generator(seed: u64) -> MetricGenerator {
        MetricGenerator::new(Arc::new(SeededRng::new(seed)))
    }

    #[test]
    fn test_series_length_bounds_and_labels() {
        let generator = seeded_generator(7);
        let series = generator.generate_series(24, 80, 120).unwrap();

        assert_eq!(series.len(), 24);
        for (i, point) in series.iter().enumerate() {
            assert_eq!(point.label, format!("{}:00", i));
            assert!(point.value >= 80.0 && point.value <= 120.0);
        }
    }

    #[test]
    fn test_series_degenerate_range() {
        let generator = seeded_generator(7);
        let series = generator.generate_series(1, 5, 5).unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].value, 5.0);
        assert_eq!(series[0].label, "0:00");
    }

    #[test]
    fn test_series_calls_do_not_alias() {
        let generator = seeded_generator(7);
        let first = generator.generate_series(10, 0, 100).unwrap();
        let kept = first.clone();
        let mut second = generator.generate_series(10, 0, 100).unwrap();

        for point in &mut second {
            point.value = -1.0;
        }
        assert_eq!(first, kept);
    }

    #[test]
    fn test_series_rejects_inverted_range() {
        let generator = seeded_generator(7);
        let previous = generator.generate_series(10, 10, 50).unwrap();
        let kept = previous.clone();

        let result = generator.generate_series(10, 50, 10);
        assert_eq!(result, Err(GeneratorError::InvalidRange { min: 50, max: 10 }));
        // The failed call produced nothing and earlier output is intact.
        assert_eq!(previous, kept);
    }

    #[test]
    fn test_series_rejects_non_positive_count() {
        let generator = seeded_generator(7);
        assert_eq!(
            generator.generate_series(0, 1, 2),
            Err(GeneratorError::InvalidCount(0))
        );
        assert_eq!(
            generator.generate_series(-3, 1, 2),
            Err(GeneratorError::InvalidCount(-3))
        );
    }

    #[test]
    fn test_series_is_deterministic_under_a_fixed_seed() {
        let first = seeded_generator(42).generate_series(24, 100, 500).unwrap();
        let second = seeded_generator(42).generate_series(24, 100, 500).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_trend_shape() {
        let generator = seeded_generator(11);
        let trend = generator.generate_trend(30, 1000, 1400).unwrap();

        assert_eq!(trend.len(), 30);
        for (i, point) in trend.iter().enumerate() {
            assert_eq!(point.label, format!("Day {}", i + 1));
            assert!(point.actual >= 1000.0 && point.actual <= 1500.0);
            assert_eq!(point.target, 1400.0);
        }
    }

    #[test]
    fn test_trend_rejects_non_positive_days() {
        let generator = seeded_generator(11);
        assert_eq!(
            generator.generate_trend(0, 1000, 1400),
            Err(GeneratorError::InvalidDays(0))
        );
    }

    #[test]
    fn test_sampled_oee_stays_in_band() {
        let generator = seeded_generator(3);
        for _ in 0..50 {
            let oee = generator.sample_oee();
            assert!(oee.availability >= 85.0 && oee.availability <= 99.0);
            assert!(oee.performance >= 85.0 && oee.performance <= 99.0);
            assert!(oee.quality >= 90.0 && oee.quality <= 99.0);
            let overall = oee.overall();
            assert!(overall >= 85.0 && overall <= 99.0);
        }
    }

    #[test]
    fn test_sampled_conditions_stay_in_band() {
        let generator = seeded_generator(3);
        for _ in 0..50 {
            let conditions = generator.sample_conditions();
            assert!(conditions.defect_rate >= 1.0 && conditions.defect_rate < 4.0);
            assert!(conditions.temperature >= 20.0 && conditions.temperature <= 30.0);
            // One decimal of precision on the temperature gauge.
            assert_eq!(
                conditions.temperature,
                (conditions.temperature * 10.0).round() / 10.0
            );
            assert!(conditions.humidity >= 40.0 && conditions.humidity <= 69.0);
        }
    }
}
