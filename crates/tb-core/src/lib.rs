//! tb-core: stable foundation for transitboard.
//!
//! Contains:
//! - params (routes, bus types, filters, and the dashboard parameter set)
//! - calendar (date windows and the default reporting window)
//! - rng (seedable random source for chart jitter)
//! - error (shared error types)

pub mod calendar;
pub mod error;
pub mod params;
pub mod rng;

// Re-exports: nice ergonomics for downstream crates
pub use calendar::*;
pub use error::{CoreError, CoreResult};
pub use params::*;
pub use rng::*;
