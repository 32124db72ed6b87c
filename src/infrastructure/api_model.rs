// Mapper to convert domain models to JSON wire types
use crate::domain::alert::{Alert, AlertSeverity};
use crate::domain::dashboard::DashboardSnapshot;
use crate::domain::factory::{
    Insight, InsightImpact, InventoryItem, Machine, MachineStatus, StockTrend, Worker, WorkerStatus,
};
use crate::domain::metrics::CompositeMetric;
use crate::domain::telemetry::{TimeSeriesPoint, TrendPoint};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub generated_at: String,
    pub production: Vec<PointDto>,
    pub energy: Vec<PointDto>,
    pub production_trend: Vec<TrendPointDto>,
    pub oee: OeeDto,
    pub conditions: ConditionsDto,
    pub alerts: Vec<AlertDto>,
}

#[derive(Debug, Serialize)]
pub struct PointDto {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Serialize)]
pub struct TrendPointDto {
    pub label: String,
    pub actual: f64,
    pub target: f64,
}

#[derive(Debug, Serialize)]
pub struct OeeDto {
    pub availability: f64,
    pub performance: f64,
    pub quality: f64,
    /// Mean of the three sub-metrics, rounded to one decimal for display.
    pub overall: f64,
}

#[derive(Debug, Serialize)]
pub struct ConditionsDto {
    pub defect_rate: f64,
    pub temperature: f64,
    pub humidity: f64,
}

#[derive(Debug, Serialize)]
pub struct AlertDto {
    pub id: i32,
    pub severity: &'static str,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct MachinesResponse {
    pub total: usize,
    pub running: usize,
    pub stopped: usize,
    pub warning: usize,
    pub maintenance: usize,
    pub machines: Vec<MachineDto>,
}

#[derive(Debug, Serialize)]
pub struct MachineDto {
    pub id: i32,
    pub name: String,
    pub status: &'static str,
    pub health: f64,
    pub efficiency: f64,
    pub uptime: f64,
}

#[derive(Debug, Serialize)]
pub struct InventoryResponse {
    pub low_stock: usize,
    pub items: Vec<InventoryItemDto>,
}

#[derive(Debug, Serialize)]
pub struct InventoryItemDto {
    pub name: String,
    pub level: f64,
    pub unit: String,
    pub min: f64,
    pub max: f64,
    pub location: String,
    pub trend: &'static str,
    pub low_stock: bool,
}

#[derive(Debug, Serialize)]
pub struct WorkforceResponse {
    pub average_efficiency: f64,
    pub workers: Vec<WorkerDto>,
}

#[derive(Debug, Serialize)]
pub struct WorkerDto {
    pub name: String,
    pub role: String,
    pub efficiency: f64,
    pub output: i32,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct InsightDto {
    pub kind: String,
    pub title: String,
    pub description: String,
    pub impact: &'static str,
    pub action: String,
    pub confidence: i32,
}

pub fn dashboard_to_wire(snapshot: DashboardSnapshot) -> DashboardResponse {
    DashboardResponse {
        generated_at: snapshot.generated_at.to_rfc3339(),
        production: snapshot.production.into_iter().map(point_to_wire).collect(),
        energy: snapshot.energy.into_iter().map(point_to_wire).collect(),
        production_trend: snapshot
            .production_trend
            .into_iter()
            .map(trend_point_to_wire)
            .collect(),
        oee: oee_to_wire(snapshot.oee),
        conditions: ConditionsDto {
            defect_rate: snapshot.conditions.defect_rate,
            temperature: snapshot.conditions.temperature,
            humidity: snapshot.conditions.humidity,
        },
        alerts: snapshot.alerts.into_iter().map(alert_to_wire).collect(),
    }
}

fn point_to_wire(point: TimeSeriesPoint) -> PointDto {
    PointDto {
        label: point.label,
        value: point.value,
    }
}

fn trend_point_to_wire(point: TrendPoint) -> TrendPointDto {
    TrendPointDto {
        label: point.label,
        actual: point.actual,
        target: point.target,
    }
}

fn oee_to_wire(oee: CompositeMetric) -> OeeDto {
    OeeDto {
        availability: oee.availability,
        performance: oee.performance,
        quality: oee.quality,
        overall: round_display(oee.overall()),
    }
}

fn alert_to_wire(alert: Alert) -> AlertDto {
    let severity = match alert.severity {
        AlertSeverity::Critical => "critical",
        AlertSeverity::Warning => "warning",
        AlertSeverity::Info => "info",
    };
    AlertDto {
        id: alert.id,
        severity,
        message: alert.message,
        timestamp: alert.timestamp,
    }
}

pub fn machines_to_wire(machines: Vec<Machine>) -> MachinesResponse {
    let count = |status: MachineStatus| machines.iter().filter(|m| m.status == status).count();
    MachinesResponse {
        total: machines.len(),
        running: count(MachineStatus::Running),
        stopped: count(MachineStatus::Stopped),
        warning: count(MachineStatus::Warning),
        maintenance: count(MachineStatus::Maintenance),
        machines: machines.into_iter().map(machine_to_wire).collect(),
    }
}

fn machine_to_wire(machine: Machine) -> MachineDto {
    let status = match machine.status {
        MachineStatus::Running => "running",
        MachineStatus::Stopped => "stopped",
        MachineStatus::Warning => "warning",
        MachineStatus::Maintenance => "maintenance",
    };
    MachineDto {
        id: machine.id,
        name: machine.name,
        status,
        health: machine.health,
        efficiency: machine.efficiency,
        uptime: machine.uptime,
    }
}

pub fn inventory_to_wire(items: Vec<InventoryItem>) -> InventoryResponse {
    let low_stock = items.iter().filter(|i| i.is_low_stock()).count();
    InventoryResponse {
        low_stock,
        items: items.into_iter().map(inventory_item_to_wire).collect(),
    }
}

fn inventory_item_to_wire(item: InventoryItem) -> InventoryItemDto {
    let trend = match item.trend {
        StockTrend::Up => "up",
        StockTrend::Down => "down",
        StockTrend::Stable => "stable",
    };
    let low_stock = item.is_low_stock();
    InventoryItemDto {
        name: item.name,
        level: item.level,
        unit: item.unit,
        min: item.min,
        max: item.max,
        location: item.location,
        trend,
        low_stock,
    }
}

pub fn workforce_to_wire(workers: Vec<Worker>) -> WorkforceResponse {
    let average_efficiency = if workers.is_empty() {
        0.0
    } else {
        round_display(workers.iter().map(|w| w.efficiency).sum::<f64>() / workers.len() as f64)
    };
    WorkforceResponse {
        average_efficiency,
        workers: workers.into_iter().map(worker_to_wire).collect(),
    }
}

fn worker_to_wire(worker: Worker) -> WorkerDto {
    let status = match worker.status {
        WorkerStatus::Active => "active",
        WorkerStatus::Break => "break",
    };
    WorkerDto {
        name: worker.name,
        role: worker.role,
        efficiency: worker.efficiency,
        output: worker.output,
        status,
    }
}

pub fn insights_to_wire(insights: Vec<Insight>) -> Vec<InsightDto> {
    insights.into_iter().map(insight_to_wire).collect()
}

fn insight_to_wire(insight: Insight) -> InsightDto {
    let impact = match insight.impact {
        InsightImpact::High => "high",
        InsightImpact::Medium => "medium",
        InsightImpact::Low => "low",
    };
    InsightDto {
        kind: insight.kind,
        title: insight.title,
        description: insight.description,
        impact,
        action: insight.action,
        confidence: insight.confidence,
    }
}

/// Round to one decimal for display. The unrounded value stays the source
/// of truth in the domain model.
fn round_display(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_rounds_to_one_decimal() {
        let wire = oee_to_wire(CompositeMetric::new(92.0, 88.0, 95.0));
        assert_eq!(wire.overall, 91.7);
        assert_eq!(wire.availability, 92.0);
    }

    #[test]
    fn test_alert_severity_wire_names() {
        let alert = Alert::new(
            1,
            AlertSeverity::Critical,
            "Machine #3 requiring maintenance".to_string(),
            "2 min ago".to_string(),
        );
        let wire = alert_to_wire(alert);
        assert_eq!(wire.severity, "critical");
        assert_eq!(wire.id, 1);
    }

    #[test]
    fn test_machine_counts_are_derived_from_the_listing() {
        let machines = vec![
            Machine::new(1, "A".to_string(), MachineStatus::Running, 90.0, 90.0, 99.0),
            Machine::new(2, "B".to_string(), MachineStatus::Running, 90.0, 90.0, 99.0),
            Machine::new(3, "C".to_string(), MachineStatus::Maintenance, 70.0, 0.0, 92.0),
        ];
        let wire = machines_to_wire(machines);
        assert_eq!(wire.total, 3);
        assert_eq!(wire.running, 2);
        assert_eq!(wire.maintenance, 1);
        assert_eq!(wire.stopped, 0);
    }

    #[test]
    fn test_workforce_average_efficiency() {
        let workers = vec![
            Worker::new("A".to_string(), "Op".to_string(), 92.0, 156, WorkerStatus::Active),
            Worker::new("B".to_string(), "QA".to_string(), 88.0, 142, WorkerStatus::Break),
        ];
        let wire = workforce_to_wire(workers);
        assert_eq!(wire.average_efficiency, 90.0);
        assert_eq!(wire.workers[1].status, "break");
    }

    #[test]
    fn test_dashboard_wire_shape() {
        use crate::domain::dashboard::DashboardSnapshot;
        use crate::domain::metrics::PlantConditions;
        use crate::domain::telemetry::{TimeSeriesPoint, TrendPoint};
        use chrono::Utc;

        let snapshot = DashboardSnapshot::new(
            vec![TimeSeriesPoint::new("0:00".to_string(), 100.0)],
            vec![TimeSeriesPoint::new("0:00".to_string(), 250.0)],
            vec![TrendPoint::new("Day 1".to_string(), 1200.0, 1400.0)],
            CompositeMetric::new(92.0, 88.0, 95.0),
            PlantConditions::new(2.3, 23.5, 45.0),
            vec![],
            Utc::now(),
        );

        let value = serde_json::to_value(dashboard_to_wire(snapshot)).unwrap();
        assert_eq!(value["oee"]["overall"], 91.7);
        assert_eq!(value["production"][0]["label"], "0:00");
        assert_eq!(value["production_trend"][0]["target"], 1400.0);
        assert_eq!(value["conditions"]["humidity"], 45.0);
    }
}
