//! Ticket sales forecast with confidence bands.

use tb_core::{BusType, BusTypeFilter, ParamSet, Route, RouteFilter};

/// Weekly ticket sales: nine weeks of history overlapping a six-week
/// forecast with upper and lower confidence bounds. `None` marks weeks
/// where a series has no point.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketForecast {
    pub labels: Vec<&'static str>,
    pub historical: Vec<Option<f64>>,
    pub forecast: Vec<Option<f64>>,
    pub upper: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

const LABELS: [&str; 14] = [
    "Mar 1", "Mar 8", "Mar 15", "Mar 22", "Mar 29", "Apr 5", "Apr 12", "Apr 19", "Apr 26",
    "May 3", "May 10", "May 17", "May 24", "May 31",
];

const HISTORICAL: [f64; 9] = [500.0, 480.0, 520.0, 550.0, 600.0, 580.0, 620.0, 650.0, 700.0];
const FORECAST: [f64; 6] = [700.0, 720.0, 750.0, 780.0, 800.0, 830.0];
const UPPER: [f64; 6] = [720.0, 750.0, 790.0, 830.0, 860.0, 900.0];
const LOWER: [f64; 6] = [680.0, 690.0, 710.0, 730.0, 740.0, 760.0];

fn run_multiplier(params: &ParamSet) -> f64 {
    let mut multiplier = 1.0;
    match params.route {
        RouteFilter::Only(Route::AhmedabadSurat) => multiplier *= 1.15,
        RouteFilter::Only(Route::SuratRajkot) => multiplier *= 0.9,
        _ => {}
    }
    match params.bus_type {
        BusTypeFilter::Only(BusType::Ac) => multiplier *= 1.1,
        BusTypeFilter::Only(BusType::Sleeper) => multiplier *= 1.2,
        _ => {}
    }
    multiplier
}

fn tail<const N: usize>(values: [f64; N]) -> Vec<Option<f64>> {
    let mut out: Vec<Option<f64>> = vec![None; LABELS.len() - N];
    out.extend(values.iter().copied().map(Some));
    out
}

/// Build the ticket sales series for the current selection.
///
/// Before a run the fixed curves are returned as-is. After a run the
/// forecast half is scaled by the route and bus-type multipliers; long
/// horizons additionally compound a per-week growth rate and spread the
/// confidence bands apart.
pub fn ticket_forecast(params: &ParamSet) -> TicketForecast {
    let mut historical: Vec<Option<f64>> = HISTORICAL.iter().copied().map(Some).collect();
    historical.resize(LABELS.len(), None);

    let mut forecast = tail(FORECAST);
    let mut upper = tail(UPPER);
    let mut lower = tail(LOWER);

    if params.ran {
        let multiplier = run_multiplier(params);
        if params.horizon.is_long_range() {
            scale_growing(&mut forecast, multiplier, 0.01);
            scale_growing(&mut upper, multiplier, 0.015);
            scale_growing(&mut lower, multiplier, 0.005);
        } else {
            scale_flat(&mut forecast, multiplier);
            scale_flat(&mut upper, multiplier * 1.05);
            scale_flat(&mut lower, multiplier * 0.95);
        }
    }

    TicketForecast {
        labels: LABELS.to_vec(),
        historical,
        forecast,
        upper,
        lower,
    }
}

fn scale_flat(series: &mut [Option<f64>], multiplier: f64) {
    for slot in series.iter_mut() {
        if let Some(value) = slot {
            *value = (*value * multiplier).round();
        }
    }
}

fn scale_growing(series: &mut [Option<f64>], multiplier: f64, rate: f64) {
    for (i, slot) in series.iter_mut().enumerate() {
        if let Some(value) = slot {
            *value = (*value * multiplier * (1.0 + i as f64 * rate)).round();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tb_core::{Horizon, ParamSet};

    #[test]
    fn base_series_has_the_expected_shape() {
        let f = ticket_forecast(&ParamSet::default());
        assert_eq!(f.labels.len(), 14);
        assert_eq!(f.historical[0], Some(500.0));
        assert_eq!(f.historical[8], Some(700.0));
        assert!(f.historical[9..].iter().all(Option::is_none));
        assert!(f.forecast[..8].iter().all(Option::is_none));
        assert_eq!(f.forecast[8], Some(700.0));
        assert_eq!(f.upper[13], Some(900.0));
        assert_eq!(f.lower[13], Some(760.0));
    }

    #[test]
    fn run_applies_route_and_bus_multipliers() {
        let params = ParamSet {
            route: RouteFilter::Only(Route::AhmedabadSurat),
            bus_type: BusTypeFilter::Only(BusType::Ac),
            ran: true,
            ..ParamSet::default()
        };
        let f = ticket_forecast(&params);
        let m: f64 = 1.15 * 1.1;
        assert_eq!(f.forecast[8], Some((700.0 * m).round()));
        assert_eq!(f.upper[8], Some((720.0 * m * 1.05).round()));
        assert_eq!(f.lower[8], Some((680.0 * m * 0.95).round()));
    }

    #[test]
    fn quiet_route_pulls_the_forecast_down() {
        let params = ParamSet {
            route: RouteFilter::Only(Route::SuratRajkot),
            ran: true,
            ..ParamSet::default()
        };
        let f = ticket_forecast(&params);
        assert_eq!(f.forecast[8], Some((700.0_f64 * 0.9).round()));
    }

    #[test]
    fn long_horizon_widens_the_bands_over_time() {
        let params = ParamSet {
            horizon: Horizon::new(90),
            ran: true,
            ..ParamSet::default()
        };
        let f = ticket_forecast(&params);
        // Growth compounds with the week index.
        assert_eq!(f.forecast[8], Some((700.0_f64 * (1.0 + 8.0 * 0.01)).round()));
        assert_eq!(f.forecast[13], Some((830.0_f64 * (1.0 + 13.0 * 0.01)).round()));
        assert_eq!(f.upper[13], Some((900.0_f64 * (1.0 + 13.0 * 0.015)).round()));

        let last_spread = f.upper[13].unwrap() - f.lower[13].unwrap();
        let first_spread = f.upper[8].unwrap() - f.lower[8].unwrap();
        assert!(last_spread > first_spread);
    }

    #[test]
    fn every_long_preset_grows_the_bands() {
        // 180 days widens like 90 does; the longest horizon must not
        // fall back to the flat scaling of the short presets.
        for days in [90, 180] {
            let params = ParamSet {
                horizon: Horizon::new(days),
                ran: true,
                ..ParamSet::default()
            };
            let f = ticket_forecast(&params);
            assert_eq!(f.forecast[13], Some((830.0_f64 * (1.0 + 13.0 * 0.01)).round()));
        }
    }

    #[test]
    fn history_is_untouched_by_a_run() {
        let base = ticket_forecast(&ParamSet::default());
        let ran = ticket_forecast(&ParamSet {
            ran: true,
            ..ParamSet::default()
        });
        assert_eq!(base.historical, ran.historical);
    }
}
