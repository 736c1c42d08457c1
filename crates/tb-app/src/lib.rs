//! Shared application service layer for transitboard.
//!
//! This crate provides a unified interface for both CLI and GUI frontends,
//! centralizing page assembly, simulated analysis runs, and dataset export.

pub mod error;
pub mod export_service;
pub mod pages;
pub mod run_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use export_service::{export_dataset, Dataset};
pub use pages::{
    build_demand_page, build_fares_page, build_overview_page, build_routes_page,
    build_tickets_page, DemandPage, FaresPage, OverviewPage, RoutesPage, TicketsPage,
};
pub use run_service::{RunKind, RunWorker, WorkerMessage, DEFAULT_RUN_DELAY};
