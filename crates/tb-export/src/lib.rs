//! CSV export for dashboard datasets.
//!
//! Modules:
//! - [`csv`]: the [`Csv`] row trait, serialization, and file naming
//! - [`error`]: export error type
//!
//! The output format is deliberately minimal: fields containing a comma
//! are wrapped in double quotes and nothing else is escaped. Downstream
//! consumers of these files expect exactly that shape.

pub mod csv;
pub mod error;

pub use csv::{csv_string, export_file_name, export_to_file, write_csv, Csv, CsvField};
pub use error::{ExportError, ExportResult};
