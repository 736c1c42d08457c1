//! Row types for the dashboard tables and reference datasets.
//!
//! Routes and bus types are stored as their display labels, exactly as
//! the tables and exported files present them. CSV headers keep the
//! camelCase names the exported files have always used.

use std::fmt;

use serde::{Deserialize, Serialize};
use tb_export::{Csv, CsvField};

use crate::filter::{HasBusType, HasRoute};

/// Confidence badge on a demand prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn label(self) -> &'static str {
        match self {
            Confidence::High => "High",
            Confidence::Medium => "Medium",
            Confidence::Low => "Low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Priority badge on a capacity recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Direction of a fare recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FareAdvice {
    Increase,
    Decrease,
    Hold,
}

impl FareAdvice {
    pub fn label(self) -> &'static str {
        match self {
            FareAdvice::Increase => "Increase",
            FareAdvice::Decrease => "Decrease",
            FareAdvice::Hold => "Hold",
        }
    }
}

impl fmt::Display for FareAdvice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Impact badge on an optimization recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    pub fn label(self) -> &'static str {
        match self {
            Impact::High => "High",
            Impact::Medium => "Medium",
            Impact::Low => "Low",
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the demand prediction table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandRow {
    pub date: String,
    pub route: String,
    pub bus_type: String,
    pub current_demand: u32,
    pub predicted_demand: u32,
    /// Percent change, signed; tables render the magnitude with an
    /// up or down marker.
    pub change: f64,
    pub confidence: Confidence,
}

impl HasRoute for DemandRow {
    fn route(&self) -> &str {
        &self.route
    }
}

impl HasBusType for DemandRow {
    fn bus_type(&self) -> &str {
        &self.bus_type
    }
}

impl Csv for DemandRow {
    fn headers() -> &'static [&'static str] {
        &[
            "date",
            "route",
            "busType",
            "currentDemand",
            "predictedDemand",
            "change",
            "confidence",
        ]
    }

    fn fields(&self) -> Vec<CsvField> {
        vec![
            self.date.clone().into(),
            self.route.clone().into(),
            self.bus_type.clone().into(),
            self.current_demand.into(),
            self.predicted_demand.into(),
            self.change.into(),
            self.confidence.label().into(),
        ]
    }
}

/// One row of the fare comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareRow {
    pub route: String,
    pub bus_type: String,
    pub current_fare: u32,
    pub suggested_fare: u32,
    pub change: f64,
    pub competitor_fare: u32,
    pub recommendation: FareAdvice,
}

impl HasRoute for FareRow {
    fn route(&self) -> &str {
        &self.route
    }
}

impl HasBusType for FareRow {
    fn bus_type(&self) -> &str {
        &self.bus_type
    }
}

impl Csv for FareRow {
    fn headers() -> &'static [&'static str] {
        &[
            "route",
            "busType",
            "currentFare",
            "suggestedFare",
            "change",
            "competitorFare",
            "recommendation",
        ]
    }

    fn fields(&self) -> Vec<CsvField> {
        vec![
            self.route.clone().into(),
            self.bus_type.clone().into(),
            self.current_fare.into(),
            self.suggested_fare.into(),
            self.change.into(),
            self.competitor_fare.into(),
            self.recommendation.label().into(),
        ]
    }
}

/// One row of the ticket forecast table. Carries no bus type, so only
/// the route filter applies to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketRow {
    pub date: String,
    pub route: String,
    pub predicted_demand: u32,
    pub current_capacity: u32,
    /// Demand minus capacity; negative means spare seats.
    pub capacity_gap: i32,
    pub recommendation: String,
    pub priority: Priority,
}

impl HasRoute for TicketRow {
    fn route(&self) -> &str {
        &self.route
    }
}

impl Csv for TicketRow {
    fn headers() -> &'static [&'static str] {
        &[
            "date",
            "route",
            "predictedDemand",
            "currentCapacity",
            "capacityGap",
            "recommendation",
            "priority",
        ]
    }

    fn fields(&self) -> Vec<CsvField> {
        vec![
            self.date.clone().into(),
            self.route.clone().into(),
            self.predicted_demand.into(),
            self.current_capacity.into(),
            i64::from(self.capacity_gap).into(),
            self.recommendation.clone().into(),
            self.priority.label().into(),
        ]
    }
}

/// One row of the route optimization table. Times are in minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationRow {
    pub route: String,
    pub current_time: u32,
    pub optimized_time: u32,
    pub time_saving: u32,
    pub recommendation: String,
    pub impact: Impact,
}

impl HasRoute for OptimizationRow {
    fn route(&self) -> &str {
        &self.route
    }
}

impl Csv for OptimizationRow {
    fn headers() -> &'static [&'static str] {
        &[
            "route",
            "currentTime",
            "optimizedTime",
            "timeSaving",
            "recommendation",
            "impact",
        ]
    }

    fn fields(&self) -> Vec<CsvField> {
        vec![
            self.route.clone().into(),
            self.current_time.into(),
            self.optimized_time.into(),
            self.time_saving.into(),
            self.recommendation.clone().into(),
            self.impact.label().into(),
        ]
    }
}

/// Daily passenger count, shown in the reference dataset dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassengerRow {
    pub date: String,
    pub route: String,
    pub passengers: u32,
    pub bus_type: String,
}

impl HasRoute for PassengerRow {
    fn route(&self) -> &str {
        &self.route
    }
}

impl Csv for PassengerRow {
    fn headers() -> &'static [&'static str] {
        &["date", "route", "passengers", "busType"]
    }

    fn fields(&self) -> Vec<CsvField> {
        vec![
            self.date.clone().into(),
            self.route.clone().into(),
            self.passengers.into(),
            self.bus_type.clone().into(),
        ]
    }
}

/// Monthly revenue by bus type, in crore rupees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueRow {
    pub month: String,
    pub ac_bus: f64,
    pub non_ac_bus: f64,
    pub sleeper: f64,
    pub total: f64,
}

impl Csv for RevenueRow {
    fn headers() -> &'static [&'static str] {
        &["month", "acBus", "nonAcBus", "sleeper", "total"]
    }

    fn fields(&self) -> Vec<CsvField> {
        vec![
            self.month.clone().into(),
            self.ac_bus.into(),
            self.non_ac_bus.into(),
            self.sleeper.into(),
            self.total.into(),
        ]
    }
}

/// Per-route efficiency summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePerformanceRow {
    pub route: String,
    pub efficiency_score: u32,
    pub target_score: u32,
    pub buses_per_day: u32,
    pub avg_occupancy: String,
}

impl HasRoute for RoutePerformanceRow {
    fn route(&self) -> &str {
        &self.route
    }
}

impl Csv for RoutePerformanceRow {
    fn headers() -> &'static [&'static str] {
        &[
            "route",
            "efficiencyScore",
            "targetScore",
            "busesPerDay",
            "avgOccupancy",
        ]
    }

    fn fields(&self) -> Vec<CsvField> {
        vec![
            self.route.clone().into(),
            self.efficiency_score.into(),
            self.target_score.into(),
            self.buses_per_day.into(),
            self.avg_occupancy.clone().into(),
        ]
    }
}

/// Historical demand observation with occupancy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalDemandRow {
    pub date: String,
    pub route: String,
    pub bus_type: String,
    pub passengers: u32,
    pub occupancy_rate: String,
}

impl HasRoute for HistoricalDemandRow {
    fn route(&self) -> &str {
        &self.route
    }
}

impl HasBusType for HistoricalDemandRow {
    fn bus_type(&self) -> &str {
        &self.bus_type
    }
}

impl Csv for HistoricalDemandRow {
    fn headers() -> &'static [&'static str] {
        &["date", "route", "busType", "passengers", "occupancyRate"]
    }

    fn fields(&self) -> Vec<CsvField> {
        vec![
            self.date.clone().into(),
            self.route.clone().into(),
            self.bus_type.clone().into(),
            self.passengers.into(),
            self.occupancy_rate.clone().into(),
        ]
    }
}

/// Daily route summary used by the overview page export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewRow {
    pub date: String,
    pub route: String,
    pub passengers: u32,
    pub revenue: u32,
}

impl HasRoute for OverviewRow {
    fn route(&self) -> &str {
        &self.route
    }
}

impl Csv for OverviewRow {
    fn headers() -> &'static [&'static str] {
        &["date", "route", "passengers", "revenue"]
    }

    fn fields(&self) -> Vec<CsvField> {
        vec![
            self.date.clone().into(),
            self.route.clone().into(),
            self.passengers.into(),
            self.revenue.into(),
        ]
    }
}
