// Telemetry data domain models

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesPoint {
    pub label: String,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(label: String, value: f64) -> Self {
        Self { label, value }
    }
}

/// One bucket of a production trend: measured output against a constant
/// target line.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub label: String,
    pub actual: f64,
    pub target: f64,
}

impl TrendPoint {
    pub fn new(label: String, actual: f64, target: f64) -> Self {
        Self {
            label,
            actual,
            target,
        }
    }
}
