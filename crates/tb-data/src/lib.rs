//! Mock record datasets behind the dashboard tables.
//!
//! Modules:
//! - [`records`]: row types and the badge enums they carry
//! - [`datasets`]: the fixed base and post-run record arrays
//! - [`filter`]: route and bus-type filtering over record slices
//!
//! Every dataset exists in two fixed versions. The base one is what the
//! tables show on load; the post-run one replaces it wholesale once a
//! simulated compute finishes. Nothing here is derived at runtime from
//! the selection beyond picking the version and filtering rows.

pub mod datasets;
pub mod filter;
pub mod records;

pub use filter::{filter_by_route, filter_rows, HasBusType, HasRoute};
pub use records::{
    Confidence, DemandRow, FareAdvice, FareRow, HistoricalDemandRow, Impact, OptimizationRow,
    OverviewRow, PassengerRow, Priority, RevenueRow, RoutePerformanceRow, TicketRow,
};
