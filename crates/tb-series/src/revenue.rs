//! Monthly revenue breakdown by bus type.

use tb_core::ParamSet;

/// Six months of stacked revenue (in crore rupees) per bus type, with
/// the total revenue target line.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueBreakdown {
    pub labels: Vec<&'static str>,
    pub ac: Vec<f64>,
    pub non_ac: Vec<f64>,
    pub sleeper: Vec<f64>,
    pub target: Vec<f64>,
}

/// Build the revenue breakdown for the current selection.
///
/// The six-month span shown shifts with the start month of the window;
/// months outside the January-June default carry their own projected
/// figures.
pub fn revenue_breakdown(params: &ParamSet) -> RevenueBreakdown {
    match params.window.map(|w| w.start_month()) {
        Some(4) => RevenueBreakdown {
            labels: vec!["Apr", "May", "Jun", "Jul", "Aug", "Sep"],
            ac: vec![5.6, 6.2, 6.8, 7.2, 7.5, 7.1],
            non_ac: vec![3.5, 3.8, 4.1, 4.3, 4.5, 4.2],
            sleeper: vec![2.0, 2.2, 2.5, 2.7, 2.8, 2.6],
            target: vec![10.0, 11.0, 12.0, 13.0, 14.0, 13.5],
        },
        Some(5) => RevenueBreakdown {
            labels: vec!["May", "Jun", "Jul", "Aug", "Sep", "Oct"],
            ac: vec![6.2, 6.8, 7.2, 7.5, 7.1, 6.5],
            non_ac: vec![3.8, 4.1, 4.3, 4.5, 4.2, 3.9],
            sleeper: vec![2.2, 2.5, 2.7, 2.8, 2.6, 2.3],
            target: vec![11.0, 12.0, 13.0, 14.0, 13.5, 12.5],
        },
        Some(2) => RevenueBreakdown {
            labels: vec!["Feb", "Mar", "Apr", "May", "Jun", "Jul"],
            ac: vec![3.8, 5.1, 5.6, 6.2, 6.8, 7.2],
            non_ac: vec![2.5, 3.2, 3.5, 3.8, 4.1, 4.3],
            sleeper: vec![1.3, 1.8, 2.0, 2.2, 2.5, 2.7],
            target: vec![8.0, 9.0, 10.0, 11.0, 12.0, 13.0],
        },
        _ => RevenueBreakdown {
            labels: vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
            ac: vec![4.2, 3.8, 5.1, 5.6, 6.2, 6.8],
            non_ac: vec![2.8, 2.5, 3.2, 3.5, 3.8, 4.1],
            sleeper: vec![1.5, 1.3, 1.8, 2.0, 2.2, 2.5],
            target: vec![8.0, 8.0, 9.0, 10.0, 11.0, 12.0],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tb_core::DateWindow;

    fn params_for_month(month: u32) -> ParamSet {
        let from = NaiveDate::from_ymd_opt(2024, month, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, month, 28).unwrap();
        ParamSet {
            window: Some(DateWindow::new(from, to).unwrap()),
            ..ParamSet::default()
        }
    }

    #[test]
    fn default_window_shows_january_onward() {
        let r = revenue_breakdown(&ParamSet::default());
        assert_eq!(r.labels, vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
        assert_eq!(r.ac[0], 4.2);
        assert_eq!(r.target[5], 12.0);
    }

    #[test]
    fn april_window_shifts_the_span() {
        let r = revenue_breakdown(&params_for_month(4));
        assert_eq!(r.labels[0], "Apr");
        assert_eq!(r.labels[5], "Sep");
        assert_eq!(r.ac[0], 5.6);
        assert_eq!(r.target[0], 10.0);
    }

    #[test]
    fn overlapping_months_agree_across_spans() {
        // June appears in every span; its figures must match.
        let default = revenue_breakdown(&ParamSet::default());
        let april = revenue_breakdown(&params_for_month(4));
        let jun_default = default.labels.iter().position(|l| *l == "Jun").unwrap();
        let jun_april = april.labels.iter().position(|l| *l == "Jun").unwrap();
        assert_eq!(default.ac[jun_default], april.ac[jun_april]);
        assert_eq!(default.sleeper[jun_default], april.sleeper[jun_april]);
    }

    #[test]
    fn series_lengths_line_up() {
        for month in [2, 3, 4, 5] {
            let r = revenue_breakdown(&params_for_month(month));
            assert_eq!(r.labels.len(), 6);
            assert_eq!(r.ac.len(), 6);
            assert_eq!(r.non_ac.len(), 6);
            assert_eq!(r.sleeper.len(), 6);
            assert_eq!(r.target.len(), 6);
        }
    }
}
