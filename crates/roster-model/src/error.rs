use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid employee id: {0:?}")]
    InvalidEmployeeId(String),
    #[error("unknown department: {0}")]
    UnknownDepartment(String),
    #[error("invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
