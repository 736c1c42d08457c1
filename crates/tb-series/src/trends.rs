//! Daily passenger trend lines.

use std::f64::consts::PI;

use chrono::Datelike;
use rand::Rng;
use tb_core::{calendar, ParamSet};

/// Actual, predicted and future-forecast passenger counts per day.
/// Future entries are `None` for the historical half of the window.
#[derive(Debug, Clone, PartialEq)]
pub struct PassengerTrends {
    pub labels: Vec<String>,
    pub actual: Vec<f64>,
    pub predicted: Vec<f64>,
    pub future: Vec<Option<f64>>,
}

const DEFAULT_ACTUAL: [f64; 14] = [
    1200.0, 1350.0, 1450.0, 1800.0, 2100.0, 2400.0, 2300.0, 1900.0, 1700.0, 1600.0, 1550.0,
    1700.0, 1850.0, 2000.0,
];

const DEFAULT_PREDICTED: [f64; 14] = [
    1250.0, 1400.0, 1500.0, 1850.0, 2150.0, 2450.0, 2350.0, 1950.0, 1750.0, 1650.0, 1600.0,
    1750.0, 1900.0, 2050.0,
];

const DEFAULT_FUTURE: [f64; 7] = [2100.0, 2250.0, 2400.0, 2350.0, 2200.0, 2300.0, 2450.0];

/// Build the passenger trend series for the current selection.
///
/// Without a date window the fixed early-March curve is returned; with
/// one, up to 14 days are synthesized from the window's month, weekday
/// and day-of-month shape plus noise from `rng`.
pub fn passenger_trends(params: &ParamSet, rng: &mut impl Rng) -> PassengerTrends {
    let mut trends = match params.window {
        None => default_trends(),
        Some(window) => windowed_trends(&window, rng),
    };

    if params.ran {
        for value in &mut trends.predicted {
            *value = (*value * 1.1).round();
        }
        for slot in &mut trends.future {
            if let Some(value) = slot {
                *value = (*value * 1.15).round();
            }
        }
    }

    trends
}

fn default_trends() -> PassengerTrends {
    let labels = (1..=14).map(|d| format!("Mar {d}")).collect();
    let mut future: Vec<Option<f64>> = vec![None; 7];
    future.extend(DEFAULT_FUTURE.iter().copied().map(Some));
    PassengerTrends {
        labels,
        actual: DEFAULT_ACTUAL.to_vec(),
        predicted: DEFAULT_PREDICTED.to_vec(),
        future,
    }
}

fn windowed_trends(window: &tb_core::DateWindow, rng: &mut impl Rng) -> PassengerTrends {
    let day_count = window.day_count().min(14);
    let mut trends = PassengerTrends {
        labels: Vec::new(),
        actual: Vec::new(),
        predicted: Vec::new(),
        future: Vec::new(),
    };

    for (i, date) in window.days().take(day_count as usize).enumerate() {
        trends.labels.push(calendar::short_day_label(date));

        let mut base = match date.month() {
            4 => 1500.0,
            5 => 1800.0,
            2 => 1000.0,
            _ => 1200.0,
        };
        if calendar::is_weekend(date) {
            base *= 1.3;
        }

        // Ridership swells toward the middle of the month.
        let day_factor = 1.0 + (f64::from(date.day()) / 31.0 * PI).sin() * 0.3;

        let actual = (base * day_factor * (0.9 + rng.gen_range(0.0..0.2))).round();
        trends.actual.push(actual);
        trends
            .predicted
            .push((actual * (1.0 + rng.gen_range(-0.05..0.05))).round());

        // First half of the window is history, the rest is forecast.
        if (i as f64) < day_count as f64 / 2.0 {
            trends.future.push(None);
        } else {
            trends
                .future
                .push(Some((actual * (1.1 + rng.gen_range(0.0..0.1))).round()));
        }
    }

    trends
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tb_core::{seeded_rng, DateWindow, ParamSet};

    fn window(from: (i32, u32, u32), to: (i32, u32, u32)) -> DateWindow {
        DateWindow::new(
            NaiveDate::from_ymd_opt(from.0, from.1, from.2).unwrap(),
            NaiveDate::from_ymd_opt(to.0, to.1, to.2).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn no_window_yields_the_fixed_march_curve() {
        let params = ParamSet {
            window: None,
            ..ParamSet::default()
        };
        let trends = passenger_trends(&params, &mut seeded_rng(0));
        assert_eq!(trends.labels.len(), 14);
        assert_eq!(trends.labels[0], "Mar 1");
        assert_eq!(trends.actual[0], 1200.0);
        assert_eq!(trends.predicted[5], 2450.0);
        assert_eq!(trends.future[6], None);
        assert_eq!(trends.future[7], Some(2100.0));
    }

    #[test]
    fn window_is_capped_at_fourteen_days() {
        let params = ParamSet {
            window: Some(window((2024, 4, 1), (2024, 4, 30))),
            ..ParamSet::default()
        };
        let trends = passenger_trends(&params, &mut seeded_rng(3));
        assert_eq!(trends.labels.len(), 14);
        assert_eq!(trends.labels[0], "Apr 1");
        assert_eq!(trends.labels[13], "Apr 14");
    }

    #[test]
    fn short_window_splits_history_and_forecast() {
        let params = ParamSet {
            window: Some(window((2024, 4, 1), (2024, 4, 7))),
            ..ParamSet::default()
        };
        let trends = passenger_trends(&params, &mut seeded_rng(3));
        assert_eq!(trends.future.len(), 7);
        assert!(trends.future[..4].iter().all(Option::is_none));
        assert!(trends.future[4..].iter().all(Option::is_some));
    }

    #[test]
    fn run_lifts_predictions_and_forecasts() {
        let base = passenger_trends(
            &ParamSet {
                window: None,
                ..ParamSet::default()
            },
            &mut seeded_rng(0),
        );
        let ran = passenger_trends(
            &ParamSet {
                window: None,
                ran: true,
                ..ParamSet::default()
            },
            &mut seeded_rng(0),
        );
        assert_eq!(ran.actual, base.actual);
        for (b, r) in base.predicted.iter().zip(&ran.predicted) {
            assert_eq!(*r, (b * 1.1).round());
        }
        assert_eq!(ran.future[7], Some((2100.0_f64 * 1.15).round()));
    }

    #[test]
    fn windowed_values_scale_with_the_month() {
        // February base is 1000, May base is 1800; with noise capped at
        // +-10% plus the day shape, May must clear February comfortably.
        let feb = passenger_trends(
            &ParamSet {
                window: Some(window((2024, 2, 5), (2024, 2, 9))),
                ..ParamSet::default()
            },
            &mut seeded_rng(8),
        );
        let may = passenger_trends(
            &ParamSet {
                window: Some(window((2024, 5, 6), (2024, 5, 10))),
                ..ParamSet::default()
            },
            &mut seeded_rng(8),
        );
        let feb_avg: f64 = feb.actual.iter().sum::<f64>() / feb.actual.len() as f64;
        let may_avg: f64 = may.actual.iter().sum::<f64>() / may.actual.len() as f64;
        assert!(may_avg > feb_avg);
    }
}
