// Alert domain model

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSeverity {
    Critical,
    Warning,
    Info,
}

/// A display-only notification. Alerts are seeded at snapshot build time
/// and never mutated or deleted afterwards.
#[derive(Debug, Clone)]
pub struct Alert {
    pub id: i32,
    pub severity: AlertSeverity,
    pub message: String,
    pub timestamp: String,
}

impl Alert {
    pub fn new(id: i32, severity: AlertSeverity, message: String, timestamp: String) -> Self {
        Self {
            id,
            severity,
            message,
            timestamp,
        }
    }
}
