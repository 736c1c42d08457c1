//! Filtering record slices by the active selection.

use tb_core::{BusTypeFilter, RouteFilter};

/// Records that carry a route display label.
pub trait HasRoute {
    fn route(&self) -> &str;
}

/// Records that carry a bus-type display label.
pub trait HasBusType {
    fn bus_type(&self) -> &str;
}

/// Keep rows whose route passes the filter.
pub fn filter_by_route<T: HasRoute + Clone>(rows: &[T], route: RouteFilter) -> Vec<T> {
    rows.iter()
        .filter(|row| route.matches(row.route()))
        .cloned()
        .collect()
}

/// Keep rows passing both the route and bus-type filters.
pub fn filter_rows<T: HasRoute + HasBusType + Clone>(
    rows: &[T],
    route: RouteFilter,
    bus_type: BusTypeFilter,
) -> Vec<T> {
    rows.iter()
        .filter(|row| route.matches(row.route()) && bus_type.matches(row.bus_type()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets;
    use tb_core::{BusType, Route};

    #[test]
    fn inactive_filters_keep_everything() {
        let rows = datasets::demand_rows(false);
        let kept = filter_rows(&rows, RouteFilter::All, BusTypeFilter::All);
        assert_eq!(kept.len(), rows.len());
    }

    #[test]
    fn route_and_bus_type_combine() {
        let rows = datasets::fare_rows(false);
        let kept = filter_rows(
            &rows,
            RouteFilter::Only(Route::AhmedabadSurat),
            BusTypeFilter::Only(BusType::Ac),
        );
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].current_fare, 300);
        assert_eq!(kept[0].suggested_fare, 320);
    }

    #[test]
    fn tickets_filter_on_route_only() {
        let rows = datasets::ticket_rows(false);
        let kept = filter_by_route(&rows, RouteFilter::Only(Route::AhmedabadSurat));
        assert_eq!(kept.len(), 3);
        assert!(kept.iter().all(|r| r.route == "Ahmedabad-Surat"));
    }

    #[test]
    fn no_match_yields_empty() {
        let rows = datasets::ticket_rows(false);
        // Baroda-Surat has no ticket forecast rows.
        let kept = filter_by_route(&rows, RouteFilter::Only(Route::BarodaSurat));
        assert!(kept.is_empty());
    }
}
