// KPI domain models and aggregation

/// OEE sub-metrics, each a percentage in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeMetric {
    pub availability: f64,
    pub performance: f64,
    pub quality: f64,
}

impl CompositeMetric {
    pub fn new(availability: f64, performance: f64, quality: f64) -> Self {
        Self {
            availability,
            performance,
            quality,
        }
    }

    /// Overall equipment effectiveness: the arithmetic mean of the three
    /// sub-metrics. Always derived on demand, never stored alongside the
    /// inputs.
    pub fn overall(&self) -> f64 {
        (self.availability + self.performance + self.quality) / 3.0
    }
}

/// Plant floor scalar readings shown next to the charts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlantConditions {
    pub defect_rate: f64,
    pub temperature: f64,
    pub humidity: f64,
}

impl PlantConditions {
    pub fn new(defect_rate: f64, temperature: f64, humidity: f64) -> Self {
        Self {
            defect_rate,
            temperature,
            humidity,
        }
    }
}
