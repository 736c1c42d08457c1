//! Headline metric cards for the overview page.

use tb_core::ParamSet;

/// The four overview cards: each value comes with its month-over-month
/// percent change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverviewMetrics {
    pub passengers: u32,
    pub passenger_change: f64,
    pub active_routes: u32,
    pub route_change: f64,
    pub operational_buses: u32,
    pub bus_change: f64,
    /// Revenue in crore rupees.
    pub revenue: f64,
    pub revenue_change: f64,
}

const DEFAULT_METRICS: OverviewMetrics = OverviewMetrics {
    passengers: 45231,
    passenger_change: 12.5,
    active_routes: 132,
    route_change: 4.3,
    operational_buses: 1024,
    bus_change: -2.1,
    revenue: 32.5,
    revenue_change: 8.2,
};

/// Metrics for the current selection.
///
/// A window touching April, May or February (checked in that order)
/// swaps in that month's figures; anything else shows the defaults.
pub fn overview_metrics(params: &ParamSet) -> OverviewMetrics {
    let Some(window) = params.window else {
        return DEFAULT_METRICS;
    };

    if window.touches_month(4) {
        OverviewMetrics {
            passengers: 48750,
            passenger_change: 15.8,
            active_routes: 138,
            route_change: 6.2,
            operational_buses: 1050,
            bus_change: 1.5,
            revenue: 35.8,
            revenue_change: 10.5,
        }
    } else if window.touches_month(5) {
        OverviewMetrics {
            passengers: 52300,
            passenger_change: 18.2,
            active_routes: 142,
            route_change: 7.5,
            operational_buses: 1080,
            bus_change: 3.2,
            revenue: 38.2,
            revenue_change: 12.8,
        }
    } else if window.touches_month(2) {
        OverviewMetrics {
            passengers: 42100,
            passenger_change: 8.5,
            active_routes: 128,
            route_change: 2.1,
            operational_buses: 1010,
            bus_change: -3.5,
            revenue: 30.1,
            revenue_change: 5.2,
        }
    } else {
        DEFAULT_METRICS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tb_core::DateWindow;

    fn window(from: (u32, u32), to: (u32, u32)) -> DateWindow {
        DateWindow::new(
            NaiveDate::from_ymd_opt(2024, from.0, from.1).unwrap(),
            NaiveDate::from_ymd_opt(2024, to.0, to.1).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn march_and_missing_windows_use_the_defaults() {
        assert_eq!(overview_metrics(&ParamSet::default()), DEFAULT_METRICS);
        let none = ParamSet {
            window: None,
            ..ParamSet::default()
        };
        assert_eq!(overview_metrics(&none), DEFAULT_METRICS);
    }

    #[test]
    fn april_figures_kick_in_at_either_endpoint() {
        // Window ending in April counts as April even if it starts in March.
        let params = ParamSet {
            window: Some(window((3, 20), (4, 5))),
            ..ParamSet::default()
        };
        let m = overview_metrics(&params);
        assert_eq!(m.passengers, 48750);
        assert_eq!(m.bus_change, 1.5);
    }

    #[test]
    fn april_wins_over_may_when_both_are_touched() {
        let params = ParamSet {
            window: Some(window((4, 20), (5, 10))),
            ..ParamSet::default()
        };
        assert_eq!(overview_metrics(&params).passengers, 48750);
    }

    #[test]
    fn february_figures() {
        let params = ParamSet {
            window: Some(window((2, 1), (2, 28))),
            ..ParamSet::default()
        };
        let m = overview_metrics(&params);
        assert_eq!(m.passengers, 42100);
        assert!(m.bus_change < 0.0);
    }
}
