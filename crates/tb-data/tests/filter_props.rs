use proptest::prelude::*;
use tb_core::{BusType, BusTypeFilter, Route, RouteFilter};
use tb_data::{datasets, filter_rows};

fn arb_route_filter() -> impl Strategy<Value = RouteFilter> {
    prop_oneof![
        Just(RouteFilter::All),
        prop::sample::select(Route::ALL.to_vec()).prop_map(RouteFilter::Only),
    ]
}

fn arb_bus_type_filter() -> impl Strategy<Value = BusTypeFilter> {
    prop_oneof![
        Just(BusTypeFilter::All),
        prop::sample::select(BusType::ALL.to_vec()).prop_map(BusTypeFilter::Only),
    ]
}

proptest! {
    #[test]
    fn filtering_never_adds_rows(
        route in arb_route_filter(),
        bus_type in arb_bus_type_filter(),
        ran in any::<bool>(),
    ) {
        let rows = datasets::demand_rows(ran);
        let kept = filter_rows(&rows, route, bus_type);
        prop_assert!(kept.len() <= rows.len());
        for row in &kept {
            prop_assert!(rows.contains(row));
        }
    }

    #[test]
    fn kept_rows_all_pass_both_filters(
        route in arb_route_filter(),
        bus_type in arb_bus_type_filter(),
        ran in any::<bool>(),
    ) {
        let kept = filter_rows(&datasets::demand_rows(ran), route, bus_type);
        for row in &kept {
            prop_assert!(route.matches(&row.route));
            prop_assert!(bus_type.matches(&row.bus_type));
        }
    }

    #[test]
    fn tightening_a_filter_never_grows_the_result(
        route in prop::sample::select(Route::ALL.to_vec()),
        ran in any::<bool>(),
    ) {
        let rows = datasets::fare_rows(ran);
        let all = filter_rows(&rows, RouteFilter::All, BusTypeFilter::All);
        let narrowed = filter_rows(&rows, RouteFilter::Only(route), BusTypeFilter::All);
        prop_assert!(narrowed.len() <= all.len());
    }
}
