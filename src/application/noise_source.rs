// Randomness seam for synthetic metric generation

/// Uniform random draws backing the metric generator. Implementations live
/// in the infrastructure layer; a seeded implementation makes generation
/// fully deterministic for tests and reproducible demo runs.
pub trait NoiseSource: Send + Sync {
    /// Draw an integer uniformly from the inclusive range [min, max].
    /// Callers guarantee min <= max.
    fn next_in_range(&self, min: i64, max: i64) -> i64;

    /// Draw a float uniformly from [0, 1).
    fn next_unit(&self) -> f64;
}
