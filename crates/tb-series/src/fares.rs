//! Fare trend lines and per-route fare comparison bars.

use tb_core::{BusType, BusTypeFilter, ParamSet, Route, RouteFilter};

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Twelve months of current, suggested and competitor fares.
#[derive(Debug, Clone, PartialEq)]
pub struct FareTrends {
    pub labels: Vec<&'static str>,
    pub current: Vec<f64>,
    pub suggested: Vec<f64>,
    pub competitor: Vec<f64>,
}

const CURRENT_TREND: [f64; 12] = [
    300.0, 300.0, 320.0, 320.0, 320.0, 350.0, 350.0, 350.0, 380.0, 380.0, 380.0, 400.0,
];
const SUGGESTED_TREND: [f64; 12] = [
    310.0, 325.0, 340.0, 330.0, 345.0, 370.0, 360.0, 375.0, 400.0, 390.0, 405.0, 420.0,
];
const COMPETITOR_TREND: [f64; 12] = [
    290.0, 295.0, 310.0, 315.0, 325.0, 340.0, 345.0, 355.0, 370.0, 375.0, 385.0, 395.0,
];

/// Build the yearly fare trend lines.
///
/// A completed run scales the suggested line by a single strategy
/// factor picked from the selection; current and competitor fares are
/// observations and never move.
pub fn fare_trends(params: &ParamSet) -> FareTrends {
    let mut suggested = SUGGESTED_TREND.to_vec();

    if params.ran {
        let factor = match (params.route, params.bus_type) {
            (RouteFilter::Only(Route::AhmedabadSurat), BusTypeFilter::Only(BusType::Ac)) => 1.08,
            (RouteFilter::Only(Route::SuratRajkot), _) => 0.95,
            _ => 1.03,
        };
        for value in &mut suggested {
            *value *= factor;
        }
    }

    FareTrends {
        labels: MONTH_LABELS.to_vec(),
        current: CURRENT_TREND.to_vec(),
        suggested,
        competitor: COMPETITOR_TREND.to_vec(),
    }
}

/// Current vs suggested fare per route, for the bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct FareComparison {
    pub labels: Vec<&'static str>,
    pub current: Vec<f64>,
    pub suggested: Vec<f64>,
}

/// Build the per-route fare comparison bars.
///
/// The post-run suggestions are fixed alternatives per route, with the
/// selected route getting its own variant.
pub fn fare_comparison(params: &ParamSet) -> FareComparison {
    let labels: Vec<&'static str> = Route::ALL.iter().map(|r| r.label()).collect();
    let current = vec![300.0, 150.0, 400.0, 250.0, 200.0];

    let suggested = if params.ran {
        let ac_selected = params.bus_type == BusTypeFilter::Only(BusType::Ac);
        vec![
            if params.route == RouteFilter::Only(Route::AhmedabadSurat) && ac_selected {
                340.0
            } else {
                320.0
            },
            if params.route == RouteFilter::Only(Route::AhmedabadBaroda) {
                170.0
            } else {
                160.0
            },
            if params.route == RouteFilter::Only(Route::SuratRajkot) {
                360.0
            } else {
                380.0
            },
            280.0,
            220.0,
        ]
    } else {
        vec![320.0, 160.0, 380.0, 270.0, 210.0]
    };

    FareComparison {
        labels,
        current,
        suggested,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_trends_are_the_fixed_curves() {
        let t = fare_trends(&ParamSet::default());
        assert_eq!(t.labels[0], "Jan");
        assert_eq!(t.current[11], 400.0);
        assert_eq!(t.suggested[2], 340.0);
        assert_eq!(t.competitor[0], 290.0);
    }

    #[test]
    fn premium_route_raises_suggested_fares() {
        let params = ParamSet {
            route: RouteFilter::Only(Route::AhmedabadSurat),
            bus_type: BusTypeFilter::Only(BusType::Ac),
            ran: true,
            ..ParamSet::default()
        };
        let t = fare_trends(&params);
        assert_eq!(t.suggested[0], 310.0 * 1.08);
        // Observed lines stay put.
        assert_eq!(t.current, CURRENT_TREND.to_vec());
        assert_eq!(t.competitor, COMPETITOR_TREND.to_vec());
    }

    #[test]
    fn discount_route_lowers_suggested_fares() {
        let params = ParamSet {
            route: RouteFilter::Only(Route::SuratRajkot),
            ran: true,
            ..ParamSet::default()
        };
        let t = fare_trends(&params);
        assert_eq!(t.suggested[0], 310.0 * 0.95);
    }

    #[test]
    fn other_selections_get_the_default_bump() {
        let params = ParamSet {
            ran: true,
            ..ParamSet::default()
        };
        let t = fare_trends(&params);
        assert_eq!(t.suggested[0], 310.0 * 1.03);
    }

    #[test]
    fn comparison_reacts_to_the_selected_route() {
        let base = fare_comparison(&ParamSet::default());
        assert_eq!(base.suggested, vec![320.0, 160.0, 380.0, 270.0, 210.0]);

        let params = ParamSet {
            route: RouteFilter::Only(Route::SuratRajkot),
            ran: true,
            ..ParamSet::default()
        };
        let run = fare_comparison(&params);
        assert_eq!(run.suggested[2], 360.0);
        assert_eq!(run.suggested[0], 320.0);
        assert_eq!(run.suggested[3], 280.0);
    }

    #[test]
    fn ac_on_the_premium_route_gets_its_own_bar() {
        let params = ParamSet {
            route: RouteFilter::Only(Route::AhmedabadSurat),
            bus_type: BusTypeFilter::Only(BusType::Ac),
            ran: true,
            ..ParamSet::default()
        };
        assert_eq!(fare_comparison(&params).suggested[0], 340.0);

        // Without the AC selection the first route keeps the stock bar.
        let params = ParamSet {
            route: RouteFilter::Only(Route::AhmedabadSurat),
            ran: true,
            ..ParamSet::default()
        };
        assert_eq!(fare_comparison(&params).suggested[0], 320.0);
    }
}
