// Catalog service - Use case for listing factory floor reference data
use crate::domain::factory::{
    Insight, InsightImpact, InventoryItem, Machine, MachineStatus, StockTrend, Worker, WorkerStatus,
};

/// Serves the static panel catalogs: machines, inventory, workforce and
/// canned insights. Listings are rebuilt per call so callers own their
/// copies outright.
#[derive(Debug, Clone, Default)]
pub struct CatalogService;

impl CatalogService {
    pub fn new() -> Self {
        Self
    }

    pub fn list_machines(&self) -> Vec<Machine> {
        vec![
            Machine::new(1, "CNC Milling Machine-01".to_string(), MachineStatus::Running, 95.0, 92.0, 99.2),
            Machine::new(2, "Robot Arm Assembly-01".to_string(), MachineStatus::Running, 88.0, 89.0, 98.5),
            Machine::new(3, "Hydraulic Press-03".to_string(), MachineStatus::Warning, 65.0, 72.0, 94.1),
            Machine::new(4, "Conveyor System Main".to_string(), MachineStatus::Running, 97.0, 95.0, 99.8),
            Machine::new(5, "Welding Robot-02".to_string(), MachineStatus::Stopped, 100.0, 0.0, 95.3),
            Machine::new(6, "Quality Scanner Pro".to_string(), MachineStatus::Running, 92.0, 94.0, 98.9),
            Machine::new(7, "Packaging Unit-01".to_string(), MachineStatus::Running, 90.0, 91.0, 97.6),
            Machine::new(8, "Laser Cutter-02".to_string(), MachineStatus::Maintenance, 70.0, 0.0, 92.4),
        ]
    }

    pub fn list_inventory(&self) -> Vec<InventoryItem> {
        vec![
            InventoryItem::new("Raw Steel".to_string(), 78.0, "tons".to_string(), 30.0, 100.0, "Warehouse A".to_string(), StockTrend::Up),
            InventoryItem::new("Plastic Pellets".to_string(), 45.0, "kg".to_string(), 50.0, 200.0, "Warehouse B".to_string(), StockTrend::Down),
            InventoryItem::new("Electronic Components".to_string(), 92.0, "units".to_string(), 100.0, 500.0, "Warehouse C".to_string(), StockTrend::Stable),
            InventoryItem::new("Packaging Materials".to_string(), 67.0, "boxes".to_string(), 50.0, 150.0, "Warehouse A".to_string(), StockTrend::Up),
            InventoryItem::new("Fasteners".to_string(), 85.0, "kg".to_string(), 40.0, 120.0, "Warehouse B".to_string(), StockTrend::Stable),
            InventoryItem::new("Lubricants".to_string(), 23.0, "liters".to_string(), 30.0, 100.0, "Warehouse C".to_string(), StockTrend::Down),
        ]
    }

    pub fn list_workforce(&self) -> Vec<Worker> {
        vec![
            Worker::new("John Smith".to_string(), "Machine Operator".to_string(), 92.0, 156, WorkerStatus::Active),
            Worker::new("Sarah Johnson".to_string(), "Quality Inspector".to_string(), 88.0, 142, WorkerStatus::Active),
            Worker::new("Mike Williams".to_string(), "Assembly Tech".to_string(), 95.0, 168, WorkerStatus::Active),
            Worker::new("Emily Davis".to_string(), "Packaging".to_string(), 85.0, 135, WorkerStatus::Break),
            Worker::new("Chris Brown".to_string(), "Maintenance".to_string(), 90.0, 148, WorkerStatus::Active),
        ]
    }

    pub fn list_insights(&self) -> Vec<Insight> {
        vec![
            Insight::new(
                "prediction".to_string(),
                "Predictive Maintenance".to_string(),
                "Machine #3 has 87% probability of failure in next 48 hours. Schedule maintenance immediately.".to_string(),
                InsightImpact::High,
                "Schedule Maintenance".to_string(),
                87,
            ),
            Insight::new(
                "optimization".to_string(),
                "Energy Optimization".to_string(),
                "Reduce energy costs by 12% by adjusting shift schedules and optimizing machine idle times.".to_string(),
                InsightImpact::Medium,
                "View Recommendations".to_string(),
                92,
            ),
            Insight::new(
                "quality".to_string(),
                "Quality Trend Analysis".to_string(),
                "Defect rate decreasing by 0.3% daily. Current quality control protocols are highly effective.".to_string(),
                InsightImpact::Low,
                "View Details".to_string(),
                95,
            ),
            Insight::new(
                "production".to_string(),
                "Production Forecast".to_string(),
                "Based on current trends, production will increase by 8% next month if conditions remain stable.".to_string(),
                InsightImpact::Medium,
                "View Forecast".to_string(),
                78,
            ),
            Insight::new(
                "anomaly".to_string(),
                "Anomaly Detected".to_string(),
                "Unusual vibration patterns detected in Conveyor System. Potential bearing wear identified.".to_string(),
                InsightImpact::High,
                "Investigate".to_string(),
                83,
            ),
            Insight::new(
                "efficiency".to_string(),
                "Efficiency Opportunity".to_string(),
                "Robot Arm A operates at 89% efficiency. Calibration could improve to 94%.".to_string(),
                InsightImpact::Low,
                "Schedule Calibration".to_string(),
                89,
            ),
        ]
    }
}
