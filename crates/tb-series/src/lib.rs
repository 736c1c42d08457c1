//! Synthetic chart series for the dashboard.
//!
//! Modules:
//! - [`heatmap`]: weekly hour-by-day demand heatmap
//! - [`trends`]: daily passenger trend lines
//! - [`tickets`]: ticket sales forecast with confidence bands
//! - [`fares`]: fare trend lines and per-route fare comparison bars
//! - [`efficiency`]: per-route efficiency scores
//! - [`revenue`]: monthly revenue breakdown by bus type
//! - [`overview`]: headline metric cards
//!
//! Generators are pure given their random source: they take the current
//! [`tb_core::ParamSet`] and, where noise is involved, a caller-supplied
//! `&mut impl Rng`. Seed the source to make the output reproducible.

pub mod efficiency;
pub mod fares;
pub mod heatmap;
pub mod overview;
pub mod revenue;
pub mod tickets;
pub mod trends;

pub use efficiency::{route_efficiency, RouteEfficiency};
pub use fares::{fare_comparison, fare_trends, FareComparison, FareTrends};
pub use heatmap::{demand_heatmap, HeatmapCell, DAY_LABELS};
pub use overview::{overview_metrics, OverviewMetrics};
pub use revenue::{revenue_breakdown, RevenueBreakdown};
pub use tickets::{ticket_forecast, TicketForecast};
pub use trends::{passenger_trends, PassengerTrends};
