//! The fixed mock datasets.
//!
//! These arrays are the product data. Values are hand-tuned to look
//! plausible on the dashboard and are swapped, not recomputed, when a
//! simulated run completes.

use tb_core::OptimizationGoal;

use crate::records::{
    Confidence, DemandRow, FareAdvice, FareRow, HistoricalDemandRow, Impact, OptimizationRow,
    OverviewRow, PassengerRow, Priority, RevenueRow, RoutePerformanceRow, TicketRow,
};

fn demand(
    date: &str,
    route: &str,
    bus_type: &str,
    current_demand: u32,
    predicted_demand: u32,
    change: f64,
    confidence: Confidence,
) -> DemandRow {
    DemandRow {
        date: date.to_owned(),
        route: route.to_owned(),
        bus_type: bus_type.to_owned(),
        current_demand,
        predicted_demand,
        change,
        confidence,
    }
}

/// Demand prediction rows; `ran` selects the post-run set.
pub fn demand_rows(ran: bool) -> Vec<DemandRow> {
    use Confidence::{High, Medium};
    if ran {
        vec![
            demand("Apr 1, 2024", "Ahmedabad-Surat", "AC Bus", 150, 185, 23.3, High),
            demand("Apr 2, 2024", "Ahmedabad-Surat", "AC Bus", 145, 190, 31.0, High),
            demand("Apr 3, 2024", "Ahmedabad-Surat", "AC Bus", 155, 200, 29.0, High),
            demand("Apr 1, 2024", "Ahmedabad-Baroda", "Non-AC Bus", 120, 110, -8.3, High),
            demand("Apr 2, 2024", "Ahmedabad-Baroda", "Non-AC Bus", 125, 115, -8.0, High),
            demand("Apr 3, 2024", "Surat-Rajkot", "Sleeper", 80, 105, 31.3, High),
            demand("Apr 4, 2024", "Surat-Rajkot", "Sleeper", 85, 110, 29.4, High),
        ]
    } else {
        vec![
            demand("Apr 1, 2024", "Ahmedabad-Surat", "AC Bus", 150, 165, 10.0, High),
            demand("Apr 2, 2024", "Ahmedabad-Surat", "AC Bus", 145, 170, 17.2, High),
            demand("Apr 3, 2024", "Ahmedabad-Surat", "AC Bus", 155, 180, 16.1, Medium),
            demand("Apr 1, 2024", "Ahmedabad-Baroda", "Non-AC Bus", 120, 115, -4.2, High),
            demand("Apr 2, 2024", "Ahmedabad-Baroda", "Non-AC Bus", 125, 120, -4.0, High),
            demand("Apr 3, 2024", "Surat-Rajkot", "Sleeper", 80, 95, 18.8, Medium),
            demand("Apr 4, 2024", "Surat-Rajkot", "Sleeper", 85, 100, 17.6, Medium),
        ]
    }
}

fn fare(
    route: &str,
    bus_type: &str,
    current_fare: u32,
    suggested_fare: u32,
    change: f64,
    competitor_fare: u32,
    recommendation: FareAdvice,
) -> FareRow {
    FareRow {
        route: route.to_owned(),
        bus_type: bus_type.to_owned(),
        current_fare,
        suggested_fare,
        change,
        competitor_fare,
        recommendation,
    }
}

/// Fare comparison rows; `ran` selects the post-run set.
pub fn fare_rows(ran: bool) -> Vec<FareRow> {
    use FareAdvice::{Decrease, Increase};
    if ran {
        vec![
            fare("Ahmedabad-Surat", "AC Bus", 300, 340, 13.3, 310, Increase),
            fare("Ahmedabad-Surat", "Non-AC Bus", 150, 170, 13.3, 155, Increase),
            fare("Ahmedabad-Baroda", "AC Bus", 200, 180, -10.0, 185, Decrease),
            fare("Surat-Rajkot", "AC Bus", 400, 360, -10.0, 370, Decrease),
            fare("Surat-Rajkot", "Sleeper", 500, 550, 10.0, 520, Increase),
        ]
    } else {
        vec![
            fare("Ahmedabad-Surat", "AC Bus", 300, 320, 6.7, 310, Increase),
            fare("Ahmedabad-Surat", "Non-AC Bus", 150, 160, 6.7, 155, Increase),
            fare("Ahmedabad-Baroda", "AC Bus", 200, 190, -5.0, 185, Decrease),
            fare("Surat-Rajkot", "AC Bus", 400, 380, -5.0, 370, Decrease),
            fare("Surat-Rajkot", "Sleeper", 500, 530, 6.0, 520, Increase),
        ]
    }
}

fn ticket(
    date: &str,
    route: &str,
    predicted_demand: u32,
    current_capacity: u32,
    recommendation: &str,
    priority: Priority,
) -> TicketRow {
    TicketRow {
        date: date.to_owned(),
        route: route.to_owned(),
        predicted_demand,
        current_capacity,
        capacity_gap: predicted_demand as i32 - current_capacity as i32,
        recommendation: recommendation.to_owned(),
        priority,
    }
}

/// Ticket forecast rows; `ran` selects the post-run set.
pub fn ticket_rows(ran: bool) -> Vec<TicketRow> {
    use Priority::{Critical, High, Low, Medium};
    if ran {
        vec![
            ticket("Apr 10, 2024", "Ahmedabad-Surat", 620, 500, "Add 5 Buses", Critical),
            ticket("Apr 11, 2024", "Ahmedabad-Surat", 650, 500, "Add 6 Buses", Critical),
            ticket("Apr 12, 2024", "Ahmedabad-Surat", 680, 500, "Add 7 Buses", Critical),
            ticket("Apr 10, 2024", "Ahmedabad-Baroda", 400, 450, "Reduce 2 Buses", Medium),
            ticket("Apr 15, 2024", "Surat-Rajkot", 380, 300, "Add 3 Buses", High),
            ticket("Apr 20, 2024", "Rajkot-Jamnagar", 210, 225, "No Change", Low),
        ]
    } else {
        vec![
            ticket("Apr 10, 2024", "Ahmedabad-Surat", 550, 500, "Add 2 Buses", High),
            ticket("Apr 11, 2024", "Ahmedabad-Surat", 580, 500, "Add 3 Buses", High),
            ticket("Apr 12, 2024", "Ahmedabad-Surat", 600, 500, "Add 4 Buses", Critical),
            ticket("Apr 10, 2024", "Ahmedabad-Baroda", 420, 450, "No Change", Low),
            ticket("Apr 15, 2024", "Surat-Rajkot", 350, 300, "Add 2 Buses", Medium),
            ticket("Apr 20, 2024", "Rajkot-Jamnagar", 200, 225, "Reduce 1 Bus", Low),
        ]
    }
}

fn optimization(
    route: &str,
    current_time: u32,
    optimized_time: u32,
    recommendation: &str,
    impact: Impact,
) -> OptimizationRow {
    OptimizationRow {
        route: route.to_owned(),
        current_time,
        optimized_time,
        time_saving: current_time - optimized_time,
        recommendation: recommendation.to_owned(),
        impact,
    }
}

/// Route optimization rows.
///
/// `ran` selects the post-run set and also enables the goal-specific
/// recommendation rewrites; the goal has no effect before a run.
pub fn optimization_rows(ran: bool, goal: OptimizationGoal) -> Vec<OptimizationRow> {
    use Impact::{High, Low, Medium};
    let mut rows = if ran {
        vec![
            optimization("Ahmedabad-Surat", 240, 195, "Add 3 More Buses", High),
            optimization("Ahmedabad-Baroda", 120, 105, "Add 1 More Bus", Medium),
            optimization("Surat-Rajkot", 300, 255, "Adjust Route & Timing", High),
            optimization("Rajkot-Jamnagar", 90, 75, "Adjust Timing", Medium),
            optimization("Baroda-Surat", 150, 125, "Add 2 More Buses", Medium),
        ]
    } else {
        vec![
            optimization("Ahmedabad-Surat", 240, 210, "Add 2 More Buses", High),
            optimization("Ahmedabad-Baroda", 120, 110, "No Change", Low),
            optimization("Surat-Rajkot", 300, 270, "Adjust Timing", Medium),
            optimization("Rajkot-Jamnagar", 90, 80, "No Change", Low),
            optimization("Baroda-Surat", 150, 130, "Add 1 More Bus", Medium),
        ]
    };

    if ran {
        for row in &mut rows {
            let rewrite: Option<(&str, Impact)> = match (goal, row.route.as_str()) {
                (OptimizationGoal::Cost, "Ahmedabad-Surat") => {
                    Some(("Optimize Bus Schedule", High))
                }
                (OptimizationGoal::Cost, "Surat-Rajkot") => {
                    Some(("Reduce Off-Peak Buses", Medium))
                }
                (OptimizationGoal::Revenue, "Ahmedabad-Surat") => {
                    Some(("Add 3 More Buses + Adjust Fare", High))
                }
                (OptimizationGoal::Revenue, "Surat-Rajkot") => Some(("Add Premium Service", High)),
                (OptimizationGoal::Passengers, "Ahmedabad-Surat") => {
                    Some(("Add 4 More Buses", High))
                }
                (OptimizationGoal::Passengers, "Surat-Rajkot") => {
                    Some(("Reduce Fare by 5%", High))
                }
                _ => None,
            };
            if let Some((recommendation, impact)) = rewrite {
                row.recommendation = recommendation.to_owned();
                row.impact = impact;
            }
        }
    }

    rows
}

/// Reference dataset behind the "Demand Prediction Dataset" dialog.
pub fn demand_reference() -> Vec<DemandRow> {
    use Confidence::{High, Medium};
    vec![
        demand("2024-04-01", "Ahmedabad-Surat", "AC Bus", 150, 165, 10.0, High),
        demand("2024-04-02", "Ahmedabad-Surat", "AC Bus", 145, 170, 17.2, High),
        demand("2024-04-03", "Ahmedabad-Surat", "AC Bus", 155, 180, 16.1, Medium),
        demand("2024-04-01", "Ahmedabad-Baroda", "Non-AC Bus", 120, 115, -4.2, High),
        demand("2024-04-02", "Ahmedabad-Baroda", "Non-AC Bus", 125, 120, -4.0, High),
        demand("2024-04-03", "Surat-Rajkot", "Sleeper", 80, 95, 18.8, Medium),
        demand("2024-04-04", "Surat-Rajkot", "Sleeper", 85, 100, 17.6, Medium),
        demand("2024-04-05", "Rajkot-Jamnagar", "AC Bus", 110, 125, 13.6, High),
        demand("2024-04-06", "Rajkot-Jamnagar", "Non-AC Bus", 95, 105, 10.5, Medium),
        demand("2024-04-07", "Baroda-Surat", "AC Bus", 130, 145, 11.5, High),
    ]
}

fn historical(
    date: &str,
    route: &str,
    bus_type: &str,
    passengers: u32,
    occupancy_rate: &str,
) -> HistoricalDemandRow {
    HistoricalDemandRow {
        date: date.to_owned(),
        route: route.to_owned(),
        bus_type: bus_type.to_owned(),
        passengers,
        occupancy_rate: occupancy_rate.to_owned(),
    }
}

/// Reference dataset behind the "Historical Demand Dataset" dialog.
pub fn historical_demand() -> Vec<HistoricalDemandRow> {
    vec![
        historical("2024-03-01", "Ahmedabad-Surat", "AC Bus", 1200, "78%"),
        historical("2024-03-02", "Ahmedabad-Surat", "AC Bus", 1350, "85%"),
        historical("2024-03-03", "Ahmedabad-Surat", "AC Bus", 1450, "92%"),
        historical("2024-03-04", "Ahmedabad-Surat", "AC Bus", 1800, "95%"),
        historical("2024-03-05", "Ahmedabad-Baroda", "Non-AC Bus", 980, "72%"),
        historical("2024-03-06", "Ahmedabad-Baroda", "Non-AC Bus", 1050, "75%"),
        historical("2024-03-07", "Surat-Rajkot", "Sleeper", 750, "85%"),
        historical("2024-03-08", "Surat-Rajkot", "Sleeper", 820, "88%"),
        historical("2024-03-09", "Rajkot-Jamnagar", "Non-AC Bus", 550, "65%"),
        historical("2024-03-10", "Baroda-Surat", "AC Bus", 920, "73%"),
    ]
}

fn passenger(date: &str, route: &str, passengers: u32, bus_type: &str) -> PassengerRow {
    PassengerRow {
        date: date.to_owned(),
        route: route.to_owned(),
        passengers,
        bus_type: bus_type.to_owned(),
    }
}

/// Reference dataset behind the "Passenger Trends Dataset" dialog.
pub fn passenger_reference() -> Vec<PassengerRow> {
    vec![
        passenger("2024-03-01", "Ahmedabad-Surat", 1200, "AC"),
        passenger("2024-03-02", "Ahmedabad-Surat", 1350, "AC"),
        passenger("2024-03-03", "Ahmedabad-Surat", 1450, "AC"),
        passenger("2024-03-04", "Ahmedabad-Surat", 1800, "AC"),
        passenger("2024-03-05", "Ahmedabad-Surat", 2100, "AC"),
        passenger("2024-03-06", "Ahmedabad-Baroda", 980, "Non-AC"),
        passenger("2024-03-07", "Ahmedabad-Baroda", 1050, "Non-AC"),
        passenger("2024-03-08", "Surat-Rajkot", 750, "Sleeper"),
        passenger("2024-03-09", "Surat-Rajkot", 820, "Sleeper"),
        passenger("2024-03-10", "Rajkot-Jamnagar", 550, "Non-AC"),
    ]
}

fn revenue(month: &str, ac_bus: f64, non_ac_bus: f64, sleeper: f64, total: f64) -> RevenueRow {
    RevenueRow {
        month: month.to_owned(),
        ac_bus,
        non_ac_bus,
        sleeper,
        total,
    }
}

/// Reference dataset behind the "Revenue Analysis Dataset" dialog.
pub fn revenue_reference() -> Vec<RevenueRow> {
    vec![
        revenue("Jan", 4.2, 2.8, 1.5, 8.5),
        revenue("Feb", 3.8, 2.5, 1.3, 7.6),
        revenue("Mar", 5.1, 3.2, 1.8, 10.1),
        revenue("Apr", 5.6, 3.5, 2.0, 11.1),
        revenue("May", 6.2, 3.8, 2.2, 12.2),
        revenue("Jun", 6.8, 4.1, 2.5, 13.4),
    ]
}

fn performance(
    route: &str,
    efficiency_score: u32,
    buses_per_day: u32,
    avg_occupancy: &str,
) -> RoutePerformanceRow {
    RoutePerformanceRow {
        route: route.to_owned(),
        efficiency_score,
        target_score: 90,
        buses_per_day,
        avg_occupancy: avg_occupancy.to_owned(),
    }
}

/// Reference dataset behind the "Route Performance Dataset" dialog.
pub fn route_performance() -> Vec<RoutePerformanceRow> {
    vec![
        performance("Ahmedabad-Surat", 85, 45, "78%"),
        performance("Ahmedabad-Baroda", 78, 32, "72%"),
        performance("Surat-Rajkot", 92, 28, "85%"),
        performance("Rajkot-Jamnagar", 65, 18, "60%"),
        performance("Baroda-Surat", 73, 25, "68%"),
    ]
}

fn overview(date: &str, route: &str, passengers: u32, revenue: u32) -> OverviewRow {
    OverviewRow {
        date: date.to_owned(),
        route: route.to_owned(),
        passengers,
        revenue,
    }
}

/// Daily summary rows behind the overview page's export button.
pub fn overview_sample() -> Vec<OverviewRow> {
    vec![
        overview("2024-03-01", "Ahmedabad-Surat", 150, 45000),
        overview("2024-03-01", "Ahmedabad-Baroda", 120, 18000),
        overview("2024-03-01", "Surat-Rajkot", 80, 32000),
        overview("2024-03-02", "Ahmedabad-Surat", 145, 43500),
        overview("2024-03-02", "Ahmedabad-Baroda", 125, 18750),
        overview("2024-03-02", "Surat-Rajkot", 85, 34000),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_swaps_demand_predictions_in_place() {
        let base = demand_rows(false);
        let updated = demand_rows(true);
        assert_eq!(base.len(), updated.len());
        for (b, u) in base.iter().zip(&updated) {
            assert_eq!(b.date, u.date);
            assert_eq!(b.route, u.route);
            assert_eq!(b.current_demand, u.current_demand);
        }
        assert_eq!(updated[0].predicted_demand, 185);
        assert_eq!(base[0].predicted_demand, 165);
    }

    #[test]
    fn capacity_gap_matches_demand_minus_capacity() {
        for row in ticket_rows(false).iter().chain(ticket_rows(true).iter()) {
            assert_eq!(
                row.capacity_gap,
                row.predicted_demand as i32 - row.current_capacity as i32
            );
        }
    }

    #[test]
    fn time_saving_is_consistent() {
        for row in optimization_rows(true, OptimizationGoal::Time) {
            assert_eq!(row.time_saving, row.current_time - row.optimized_time);
        }
    }

    #[test]
    fn goal_rewrites_only_after_a_run() {
        let before = optimization_rows(false, OptimizationGoal::Cost);
        assert_eq!(before[0].recommendation, "Add 2 More Buses");

        let after = optimization_rows(true, OptimizationGoal::Cost);
        assert_eq!(after[0].recommendation, "Optimize Bus Schedule");
        assert_eq!(after[2].recommendation, "Reduce Off-Peak Buses");
        assert_eq!(after[2].impact, Impact::Medium);
        // Routes outside the goal rewrites keep the post-run defaults.
        assert_eq!(after[1].recommendation, "Add 1 More Bus");
    }

    #[test]
    fn passenger_goal_rewrites() {
        let rows = optimization_rows(true, OptimizationGoal::Passengers);
        assert_eq!(rows[0].recommendation, "Add 4 More Buses");
        assert_eq!(rows[2].recommendation, "Reduce Fare by 5%");
        assert_eq!(rows[2].impact, Impact::High);
    }

    #[test]
    fn reference_datasets_have_expected_sizes() {
        assert_eq!(demand_reference().len(), 10);
        assert_eq!(historical_demand().len(), 10);
        assert_eq!(passenger_reference().len(), 10);
        assert_eq!(revenue_reference().len(), 6);
        assert_eq!(route_performance().len(), 5);
        assert_eq!(overview_sample().len(), 6);
    }
}
