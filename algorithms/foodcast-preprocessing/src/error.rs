//! Error definitions for preprocessing
use thiserror::Error;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("not enough samples")]
    NotEnoughSamples,
    #[error("cannot read `{value}` in column `{column}`, row {row} as a number")]
    InvalidNumber {
        column: String,
        row: usize,
        value: String,
    },
    #[error("could not convert `{value}` to a number for column `{column}`")]
    NotNumeric { column: String, value: String },
    #[error("expected {expected} features, found {found}")]
    FeatureCount { expected: usize, found: usize },
    #[error(transparent)]
    Foodcast(#[from] foodcast::error::Error),
}
