//! Dashboard parameter model.
//!
//! Every control on the dashboard maps to a value type here. The whole
//! selection travels as a [`ParamSet`], fully replaced on each change and
//! passed by value into the pure data/series functions; there is no
//! process-wide mutable state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calendar::DateWindow;
use crate::error::CoreError;

/// Named origin-destination pair served by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    AhmedabadSurat,
    AhmedabadBaroda,
    SuratRajkot,
    RajkotJamnagar,
    BarodaSurat,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::AhmedabadSurat,
        Route::AhmedabadBaroda,
        Route::SuratRajkot,
        Route::RajkotJamnagar,
        Route::BarodaSurat,
    ];

    /// Short machine form, as used by the selection controls.
    pub fn code(self) -> &'static str {
        match self {
            Route::AhmedabadSurat => "ahmedabad-surat",
            Route::AhmedabadBaroda => "ahmedabad-baroda",
            Route::SuratRajkot => "surat-rajkot",
            Route::RajkotJamnagar => "rajkot-jamnagar",
            Route::BarodaSurat => "baroda-surat",
        }
    }

    /// Display form: hyphen-joined with each segment capitalized.
    pub fn label(self) -> &'static str {
        match self {
            Route::AhmedabadSurat => "Ahmedabad-Surat",
            Route::AhmedabadBaroda => "Ahmedabad-Baroda",
            Route::SuratRajkot => "Surat-Rajkot",
            Route::RajkotJamnagar => "Rajkot-Jamnagar",
            Route::BarodaSurat => "Baroda-Surat",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Route {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::ALL
            .into_iter()
            .find(|r| r.code() == s || r.label() == s)
            .ok_or_else(|| CoreError::UnknownRoute(s.to_string()))
    }
}

/// Service class of a bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusType {
    Ac,
    NonAc,
    Sleeper,
}

impl BusType {
    pub const ALL: [BusType; 3] = [BusType::Ac, BusType::NonAc, BusType::Sleeper];

    pub fn code(self) -> &'static str {
        match self {
            BusType::Ac => "ac",
            BusType::NonAc => "non-ac",
            BusType::Sleeper => "sleeper",
        }
    }

    /// Display label the mock records carry.
    pub fn label(self) -> &'static str {
        match self {
            BusType::Ac => "AC Bus",
            BusType::NonAc => "Non-AC Bus",
            BusType::Sleeper => "Sleeper",
        }
    }
}

impl fmt::Display for BusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BusType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BusType::ALL
            .into_iter()
            .find(|b| b.code() == s || b.label() == s)
            .ok_or_else(|| CoreError::UnknownBusType(s.to_string()))
    }
}

/// Route selection with the "all routes" sentinel.
///
/// An inactive (`All`) filter matches every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RouteFilter {
    #[default]
    All,
    Only(Route),
}

impl RouteFilter {
    pub fn is_all(self) -> bool {
        matches!(self, RouteFilter::All)
    }

    /// Whether a record with the given display label passes this filter.
    pub fn matches(self, label: &str) -> bool {
        match self {
            RouteFilter::All => true,
            RouteFilter::Only(route) => route.label() == label,
        }
    }
}

/// Bus-type selection with the "all types" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BusTypeFilter {
    #[default]
    All,
    Only(BusType),
}

impl BusTypeFilter {
    pub fn is_all(self) -> bool {
        matches!(self, BusTypeFilter::All)
    }

    pub fn matches(self, label: &str) -> bool {
        match self {
            BusTypeFilter::All => true,
            BusTypeFilter::Only(bus_type) => bus_type.label() == label,
        }
    }
}

/// How far a forecast extends into the future, in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Horizon {
    pub days: u32,
}

impl Horizon {
    /// The presets offered by the forecast controls.
    pub const PRESETS: [Horizon; 4] = [
        Horizon { days: 7 },
        Horizon { days: 30 },
        Horizon { days: 90 },
        Horizon { days: 180 },
    ];

    pub fn new(days: u32) -> Self {
        Self { days }
    }

    /// Long horizons widen the forecast confidence bands over time.
    pub fn is_long_range(self) -> bool {
        self.days >= 90
    }
}

impl Default for Horizon {
    fn default() -> Self {
        Horizon { days: 30 }
    }
}

/// Objective selected for a route optimization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OptimizationGoal {
    #[default]
    Time,
    Cost,
    Revenue,
    Passengers,
}

impl OptimizationGoal {
    pub const ALL: [OptimizationGoal; 4] = [
        OptimizationGoal::Time,
        OptimizationGoal::Cost,
        OptimizationGoal::Revenue,
        OptimizationGoal::Passengers,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OptimizationGoal::Time => "Minimize Travel Time",
            OptimizationGoal::Cost => "Minimize Operational Cost",
            OptimizationGoal::Revenue => "Maximize Revenue",
            OptimizationGoal::Passengers => "Maximize Passengers",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            OptimizationGoal::Time => "time",
            OptimizationGoal::Cost => "cost",
            OptimizationGoal::Revenue => "revenue",
            OptimizationGoal::Passengers => "passengers",
        }
    }
}

impl FromStr for OptimizationGoal {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OptimizationGoal::ALL
            .into_iter()
            .find(|g| g.code() == s)
            .ok_or_else(|| CoreError::UnknownGoal(s.to_string()))
    }
}

/// Model choice shown in the forecast controls.
///
/// Recorded in the parameter set but never consulted by the generators:
/// the mock pipeline swaps fixed datasets regardless of model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ForecastModel {
    #[default]
    Arima,
    Prophet,
    Lstm,
    Ensemble,
}

impl ForecastModel {
    pub const ALL: [ForecastModel; 4] = [
        ForecastModel::Arima,
        ForecastModel::Prophet,
        ForecastModel::Lstm,
        ForecastModel::Ensemble,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ForecastModel::Arima => "ARIMA",
            ForecastModel::Prophet => "Prophet",
            ForecastModel::Lstm => "LSTM Neural Network",
            ForecastModel::Ensemble => "Ensemble Model",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            ForecastModel::Arima => "arima",
            ForecastModel::Prophet => "prophet",
            ForecastModel::Lstm => "lstm",
            ForecastModel::Ensemble => "ensemble",
        }
    }
}

impl FromStr for ForecastModel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ForecastModel::ALL
            .into_iter()
            .find(|m| m.code() == s)
            .ok_or_else(|| CoreError::UnknownModel(s.to_string()))
    }
}

/// Traffic condition selector on the optimization page. Display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TrafficCondition {
    #[default]
    Normal,
    Peak,
    Holiday,
    Monsoon,
}

impl TrafficCondition {
    pub const ALL: [TrafficCondition; 4] = [
        TrafficCondition::Normal,
        TrafficCondition::Peak,
        TrafficCondition::Holiday,
        TrafficCondition::Monsoon,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TrafficCondition::Normal => "Normal",
            TrafficCondition::Peak => "Peak Hours",
            TrafficCondition::Holiday => "Holiday",
            TrafficCondition::Monsoon => "Monsoon",
        }
    }
}

/// Complete current selection for a dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamSet {
    pub route: RouteFilter,
    pub bus_type: BusTypeFilter,
    /// Absent window means "use the documented default" (March 2024).
    pub window: Option<DateWindow>,
    pub horizon: Horizon,
    pub goal: OptimizationGoal,
    pub model: ForecastModel,
    pub traffic: TrafficCondition,
    /// Set once the simulated compute has completed; selects the
    /// post-run dataset and applies the post-run series boosts.
    pub ran: bool,
}

impl Default for ParamSet {
    fn default() -> Self {
        Self {
            route: RouteFilter::All,
            bus_type: BusTypeFilter::All,
            window: Some(DateWindow::default_window()),
            horizon: Horizon::default(),
            goal: OptimizationGoal::default(),
            model: ForecastModel::default(),
            traffic: TrafficCondition::default(),
            ran: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_codes_round_trip() {
        for route in Route::ALL {
            assert_eq!(route.code().parse::<Route>().unwrap(), route);
            assert_eq!(route.label().parse::<Route>().unwrap(), route);
        }
    }

    #[test]
    fn bus_type_labels() {
        assert_eq!(BusType::Ac.label(), "AC Bus");
        assert_eq!(BusType::NonAc.label(), "Non-AC Bus");
        assert_eq!(BusType::Sleeper.label(), "Sleeper");
    }

    #[test]
    fn unknown_route_is_an_error() {
        assert!("surat-ahmedabad".parse::<Route>().is_err());
    }

    #[test]
    fn all_filter_matches_everything() {
        for route in Route::ALL {
            assert!(RouteFilter::All.matches(route.label()));
        }
        assert!(RouteFilter::Only(Route::SuratRajkot).matches("Surat-Rajkot"));
        assert!(!RouteFilter::Only(Route::SuratRajkot).matches("Ahmedabad-Surat"));
    }

    #[test]
    fn long_range_threshold() {
        assert!(!Horizon::new(30).is_long_range());
        assert!(Horizon::new(90).is_long_range());
        assert!(Horizon::new(180).is_long_range());
    }
}
