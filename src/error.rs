use crate::domain::money::Money;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OptimizerError {
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Unknown payment method: {0}")]
    NotFound(String),
    #[error("Insufficient budget on {method}: requested {requested}, remaining {remaining}")]
    InsufficientBudget {
        method: String,
        requested: Money,
        remaining: Money,
    },
    #[error("Order {0} was already allocated")]
    DuplicateOrder(String),
}

pub type Result<T> = std::result::Result<T, OptimizerError>;
