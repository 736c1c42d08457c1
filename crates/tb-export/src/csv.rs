//! Row trait and CSV writer.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{ExportError, ExportResult};

/// One cell of an exported row.
#[derive(Debug, Clone, PartialEq)]
pub enum CsvField {
    Text(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for CsvField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvField::Text(s) => write!(f, "{s}"),
            CsvField::Int(n) => write!(f, "{n}"),
            CsvField::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for CsvField {
    fn from(s: &str) -> Self {
        CsvField::Text(s.to_owned())
    }
}

impl From<String> for CsvField {
    fn from(s: String) -> Self {
        CsvField::Text(s)
    }
}

impl From<i64> for CsvField {
    fn from(n: i64) -> Self {
        CsvField::Int(n)
    }
}

impl From<u32> for CsvField {
    fn from(n: u32) -> Self {
        CsvField::Int(i64::from(n))
    }
}

impl From<f64> for CsvField {
    fn from(x: f64) -> Self {
        CsvField::Float(x)
    }
}

/// A record type that can be written to the dashboard's CSV files.
///
/// Header names are the column names consumers of the files expect and
/// are kept exactly as-is, including their casing.
pub trait Csv {
    fn headers() -> &'static [&'static str];
    fn fields(&self) -> Vec<CsvField>;
}

fn render_field(field: &CsvField) -> String {
    let raw = field.to_string();
    // Only commas trigger quoting. Quotes and newlines inside fields are
    // not escaped; the datasets exported here never contain them.
    if raw.contains(',') {
        format!("\"{raw}\"")
    } else {
        raw
    }
}

/// Serialize rows to a CSV string with a header line.
///
/// Returns [`ExportError::NoRows`] for an empty slice so callers can
/// surface the condition instead of writing a header-only file.
pub fn csv_string<T: Csv>(rows: &[T]) -> ExportResult<String> {
    if rows.is_empty() {
        return Err(ExportError::NoRows);
    }
    let mut out = String::new();
    out.push_str(&T::headers().join(","));
    out.push('\n');
    for row in rows {
        let line: Vec<String> = row.fields().iter().map(render_field).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    Ok(out)
}

/// Write rows as CSV to an arbitrary writer.
pub fn write_csv<T: Csv, W: Write>(rows: &[T], mut writer: W) -> ExportResult<()> {
    let body = csv_string(rows)?;
    writer.write_all(body.as_bytes())?;
    Ok(())
}

/// File name for an export started on `date`: `{stem}-{YYYY-MM-DD}.csv`.
pub fn export_file_name(stem: &str, date: NaiveDate) -> String {
    format!("{stem}-{}.csv", date.format("%Y-%m-%d"))
}

/// Write rows to `dir/{stem}-{date}.csv` and return the full path.
pub fn export_to_file<T: Csv>(
    rows: &[T],
    dir: &Path,
    stem: &str,
    date: NaiveDate,
) -> ExportResult<PathBuf> {
    // Serialize first so an empty dataset never leaves a stub file.
    let body = csv_string(rows)?;
    let path = dir.join(export_file_name(stem, date));
    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(body.as_bytes())?;
    writer.flush()?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fare {
        route: &'static str,
        fare: i64,
    }

    impl Csv for Fare {
        fn headers() -> &'static [&'static str] {
            &["route", "currentFare"]
        }

        fn fields(&self) -> Vec<CsvField> {
            vec![self.route.into(), self.fare.into()]
        }
    }

    #[test]
    fn header_line_comes_first() {
        let rows = vec![Fare { route: "Ahmedabad-Surat", fare: 300 }];
        let out = csv_string(&rows).unwrap();
        assert_eq!(out, "route,currentFare\nAhmedabad-Surat,300\n");
    }

    #[test]
    fn comma_fields_are_quoted() {
        let rows = vec![Fare { route: "Surat, via Baroda", fare: 150 }];
        let out = csv_string(&rows).unwrap();
        assert!(out.contains("\"Surat, via Baroda\",150"));
    }

    #[test]
    fn empty_dataset_is_an_error() {
        let rows: Vec<Fare> = vec![];
        assert!(matches!(csv_string(&rows), Err(ExportError::NoRows)));
    }

    #[test]
    fn whole_floats_render_without_decimals() {
        assert_eq!(CsvField::Float(10.0).to_string(), "10");
        assert_eq!(CsvField::Float(6.7).to_string(), "6.7");
    }

    #[test]
    fn file_name_embeds_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
        assert_eq!(export_file_name("fare-data", date), "fare-data-2024-04-02.csv");
    }
}
