use thiserror::Error;

pub type ExportResult<T> = Result<T, ExportError>;

#[derive(Debug, Error)]
pub enum ExportError {
    /// Export was requested for a dataset with zero rows.
    #[error("nothing to export: dataset is empty")]
    NoRows,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
