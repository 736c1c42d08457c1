use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Unknown bus type: {0}")]
    UnknownBusType(String),

    #[error("Unknown optimization goal: {0}")]
    UnknownGoal(String),

    #[error("Unknown forecast model: {0}")]
    UnknownModel(String),

    #[error("Invalid date window: from {from} is after to {to}")]
    InvalidWindow {
        from: chrono::NaiveDate,
        to: chrono::NaiveDate,
    },
}
