//! Page assembly: one function per dashboard page, gathering every
//! series and table that page shows for the current selection.

use rand::Rng;
use tb_core::ParamSet;
use tb_data::{datasets, filter_by_route, filter_rows};
use tb_data::{DemandRow, FareRow, OptimizationRow, TicketRow};
use tb_series::{
    demand_heatmap, fare_comparison, fare_trends, overview_metrics, passenger_trends,
    revenue_breakdown, route_efficiency, ticket_forecast, FareComparison, FareTrends, HeatmapCell,
    OverviewMetrics, PassengerTrends, RevenueBreakdown, RouteEfficiency, TicketForecast,
};
use tracing::debug;

/// Everything on the overview page.
#[derive(Debug, Clone)]
pub struct OverviewPage {
    pub metrics: OverviewMetrics,
    pub trends: PassengerTrends,
    pub revenue: RevenueBreakdown,
    pub efficiency: RouteEfficiency,
    pub heatmap: Vec<HeatmapCell>,
}

pub fn build_overview_page(params: &ParamSet, rng: &mut impl Rng) -> OverviewPage {
    debug!(window = ?params.window, "assembling overview page");
    OverviewPage {
        metrics: overview_metrics(params),
        trends: passenger_trends(params, rng),
        revenue: revenue_breakdown(params),
        efficiency: route_efficiency(params),
        heatmap: demand_heatmap(params, rng),
    }
}

/// Everything on the demand prediction page.
#[derive(Debug, Clone)]
pub struct DemandPage {
    pub heatmap: Vec<HeatmapCell>,
    pub trends: PassengerTrends,
    pub rows: Vec<DemandRow>,
}

pub fn build_demand_page(params: &ParamSet, rng: &mut impl Rng) -> DemandPage {
    debug!(ran = params.ran, "assembling demand page");
    let rows = filter_rows(&datasets::demand_rows(params.ran), params.route, params.bus_type);
    DemandPage {
        heatmap: demand_heatmap(params, rng),
        trends: passenger_trends(params, rng),
        rows,
    }
}

/// Everything on the fare estimation page.
#[derive(Debug, Clone)]
pub struct FaresPage {
    pub trends: FareTrends,
    pub comparison: FareComparison,
    pub rows: Vec<FareRow>,
}

pub fn build_fares_page(params: &ParamSet) -> FaresPage {
    debug!(ran = params.ran, "assembling fares page");
    let rows = filter_rows(&datasets::fare_rows(params.ran), params.route, params.bus_type);
    FaresPage {
        trends: fare_trends(params),
        comparison: fare_comparison(params),
        rows,
    }
}

/// Everything on the ticket forecast page. The forecast rows carry no
/// bus type, so only the route filter applies to them.
#[derive(Debug, Clone)]
pub struct TicketsPage {
    pub forecast: TicketForecast,
    pub rows: Vec<TicketRow>,
}

pub fn build_tickets_page(params: &ParamSet) -> TicketsPage {
    debug!(ran = params.ran, horizon = params.horizon.days, "assembling tickets page");
    TicketsPage {
        forecast: ticket_forecast(params),
        rows: filter_by_route(&datasets::ticket_rows(params.ran), params.route),
    }
}

/// Everything on the route optimization page.
#[derive(Debug, Clone)]
pub struct RoutesPage {
    pub efficiency: RouteEfficiency,
    pub rows: Vec<OptimizationRow>,
}

pub fn build_routes_page(params: &ParamSet) -> RoutesPage {
    debug!(ran = params.ran, goal = params.goal.code(), "assembling routes page");
    RoutesPage {
        efficiency: route_efficiency(params),
        rows: filter_by_route(
            &datasets::optimization_rows(params.ran, params.goal),
            params.route,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tb_core::{seeded_rng, OptimizationGoal, Route, RouteFilter};

    #[test]
    fn overview_page_is_complete() {
        let page = build_overview_page(&ParamSet::default(), &mut seeded_rng(0));
        assert_eq!(page.heatmap.len(), 7 * 24);
        assert_eq!(page.trends.labels.len(), 14);
        assert_eq!(page.revenue.labels.len(), 6);
        assert_eq!(page.efficiency.scores.len(), 5);
        assert_eq!(page.metrics.passengers, 45231);
    }

    #[test]
    fn demand_page_filters_its_rows() {
        let params = ParamSet {
            route: RouteFilter::Only(Route::SuratRajkot),
            ..ParamSet::default()
        };
        let page = build_demand_page(&params, &mut seeded_rng(0));
        assert_eq!(page.rows.len(), 2);
        assert!(page.rows.iter().all(|r| r.route == "Surat-Rajkot"));
    }

    #[test]
    fn routes_page_honours_the_goal_after_a_run() {
        let params = ParamSet {
            goal: OptimizationGoal::Revenue,
            ran: true,
            ..ParamSet::default()
        };
        let page = build_routes_page(&params);
        assert_eq!(page.rows[0].recommendation, "Add 3 More Buses + Adjust Fare");
        // The efficiency bars pick up the post-run lift too.
        assert_eq!(page.efficiency.scores[2], 98.0);
    }

    #[test]
    fn tickets_page_forecast_and_rows_agree_on_the_run_state() {
        let base = build_tickets_page(&ParamSet::default());
        let ran = build_tickets_page(&ParamSet {
            ran: true,
            ..ParamSet::default()
        });
        assert_eq!(base.rows[0].predicted_demand, 550);
        assert_eq!(ran.rows[0].predicted_demand, 620);
        assert_eq!(base.forecast.historical, ran.forecast.historical);
    }
}
