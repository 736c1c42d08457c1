//! Error types for the tb-app service layer.

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for both CLI and GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Parameter error: {0}")]
    Params(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),

    #[error("Worker error: {0}")]
    Worker(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for tb-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<tb_core::CoreError> for AppError {
    fn from(err: tb_core::CoreError) -> Self {
        AppError::Params(err.to_string())
    }
}

impl From<tb_export::ExportError> for AppError {
    fn from(err: tb_export::ExportError) -> Self {
        AppError::Export(err.to_string())
    }
}
