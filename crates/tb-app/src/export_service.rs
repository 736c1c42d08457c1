//! Dataset export: maps each exportable dataset to its rows and file
//! name stem, and writes the CSV next to wherever the caller points.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use tb_core::ParamSet;
use tb_data::datasets;
use tb_export::{export_to_file, Csv};
use tracing::info;

use crate::error::{AppError, AppResult};

/// Every dataset an export button can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    DashboardOverview,
    DemandPrediction,
    DemandReference,
    HistoricalDemand,
    PassengerTrends,
    RevenueAnalysis,
    RoutePerformance,
    FareEstimation,
    TicketForecast,
    RouteOptimization,
}

impl Dataset {
    pub const ALL: [Dataset; 10] = [
        Dataset::DashboardOverview,
        Dataset::DemandPrediction,
        Dataset::DemandReference,
        Dataset::HistoricalDemand,
        Dataset::PassengerTrends,
        Dataset::RevenueAnalysis,
        Dataset::RoutePerformance,
        Dataset::FareEstimation,
        Dataset::TicketForecast,
        Dataset::RouteOptimization,
    ];

    /// File name stem, also the CLI-facing identifier.
    pub fn stem(self) -> &'static str {
        match self {
            Dataset::DashboardOverview => "dashboard-overview",
            Dataset::DemandPrediction => "demand-prediction",
            Dataset::DemandReference => "demand-reference",
            Dataset::HistoricalDemand => "historical-demand",
            Dataset::PassengerTrends => "passenger-trends",
            Dataset::RevenueAnalysis => "revenue-analysis",
            Dataset::RoutePerformance => "route-performance",
            Dataset::FareEstimation => "fare-estimation",
            Dataset::TicketForecast => "ticket-forecast",
            Dataset::RouteOptimization => "route-optimization",
        }
    }
}

impl FromStr for Dataset {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dataset::ALL
            .into_iter()
            .find(|d| d.stem() == s)
            .ok_or_else(|| AppError::UnknownDataset(s.to_string()))
    }
}

fn write<T: Csv>(rows: &[T], dir: &Path, stem: &str, date: NaiveDate) -> AppResult<PathBuf> {
    let path = export_to_file(rows, dir, stem, date)?;
    info!(path = %path.display(), rows = rows.len(), "exported dataset");
    Ok(path)
}

/// Export a dataset as seen under the current selection, dated today.
pub fn export_dataset(dataset: Dataset, params: &ParamSet, dir: &Path) -> AppResult<PathBuf> {
    export_dataset_on(dataset, params, dir, Local::now().date_naive())
}

/// Export with an explicit date, so file names are predictable in tests.
pub fn export_dataset_on(
    dataset: Dataset,
    params: &ParamSet,
    dir: &Path,
    date: NaiveDate,
) -> AppResult<PathBuf> {
    let stem = dataset.stem();
    match dataset {
        Dataset::DashboardOverview => write(&datasets::overview_sample(), dir, stem, date),
        Dataset::DemandPrediction => {
            let rows = tb_data::filter_rows(
                &datasets::demand_rows(params.ran),
                params.route,
                params.bus_type,
            );
            write(&rows, dir, stem, date)
        }
        Dataset::DemandReference => write(&datasets::demand_reference(), dir, stem, date),
        Dataset::HistoricalDemand => write(&datasets::historical_demand(), dir, stem, date),
        Dataset::PassengerTrends => write(&datasets::passenger_reference(), dir, stem, date),
        Dataset::RevenueAnalysis => write(&datasets::revenue_reference(), dir, stem, date),
        Dataset::RoutePerformance => write(&datasets::route_performance(), dir, stem, date),
        Dataset::FareEstimation => {
            let rows = tb_data::filter_rows(
                &datasets::fare_rows(params.ran),
                params.route,
                params.bus_type,
            );
            write(&rows, dir, stem, date)
        }
        Dataset::TicketForecast => {
            let rows = tb_data::filter_by_route(&datasets::ticket_rows(params.ran), params.route);
            write(&rows, dir, stem, date)
        }
        Dataset::RouteOptimization => {
            let rows = tb_data::filter_by_route(
                &datasets::optimization_rows(params.ran, params.goal),
                params.route,
            );
            write(&rows, dir, stem, date)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_parse_back() {
        for dataset in Dataset::ALL {
            assert_eq!(dataset.stem().parse::<Dataset>().unwrap(), dataset);
        }
        assert!("bogus-dataset".parse::<Dataset>().is_err());
    }
}
