// Factory floor domain models: machines, inventory, workforce, insights

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineStatus {
    Running,
    Stopped,
    Warning,
    Maintenance,
}

#[derive(Debug, Clone)]
pub struct Machine {
    pub id: i32,
    pub name: String,
    pub status: MachineStatus,
    pub health: f64,
    pub efficiency: f64,
    pub uptime: f64,
}

impl Machine {
    pub fn new(
        id: i32,
        name: String,
        status: MachineStatus,
        health: f64,
        efficiency: f64,
        uptime: f64,
    ) -> Self {
        Self {
            id,
            name,
            status,
            health,
            efficiency,
            uptime,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockTrend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone)]
pub struct InventoryItem {
    pub name: String,
    pub level: f64,
    pub unit: String,
    pub min: f64,
    pub max: f64,
    pub location: String,
    pub trend: StockTrend,
}

impl InventoryItem {
    pub fn new(
        name: String,
        level: f64,
        unit: String,
        min: f64,
        max: f64,
        location: String,
        trend: StockTrend,
    ) -> Self {
        Self {
            name,
            level,
            unit,
            min,
            max,
            location,
            trend,
        }
    }

    /// Stock below the reorder threshold.
    pub fn is_low_stock(&self) -> bool {
        self.level < self.min
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerStatus {
    Active,
    Break,
}

#[derive(Debug, Clone)]
pub struct Worker {
    pub name: String,
    pub role: String,
    pub efficiency: f64,
    pub output: i32,
    pub status: WorkerStatus,
}

impl Worker {
    pub fn new(name: String, role: String, efficiency: f64, output: i32, status: WorkerStatus) -> Self {
        Self {
            name,
            role,
            efficiency,
            output,
            status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightImpact {
    High,
    Medium,
    Low,
}

/// A canned analytics recommendation for the insights panel.
#[derive(Debug, Clone)]
pub struct Insight {
    pub kind: String,
    pub title: String,
    pub description: String,
    pub impact: InsightImpact,
    pub action: String,
    pub confidence: i32,
}

impl Insight {
    pub fn new(
        kind: String,
        title: String,
        description: String,
        impact: InsightImpact,
        action: String,
        confidence: i32,
    ) -> Self {
        Self {
            kind,
            title,
            description,
            impact,
            action,
            confidence,
        }
    }
}
