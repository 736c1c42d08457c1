pub mod demand_view;
pub mod fares_view;
pub mod overview_view;
pub mod routes_view;
pub mod tickets_view;
pub mod widgets;

pub use demand_view::DemandView;
pub use fares_view::FaresView;
pub use overview_view::OverviewView;
pub use routes_view::RoutesView;
pub use tickets_view::TicketsView;
