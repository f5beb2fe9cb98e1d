//! Error types in foodcast
//!

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("required column `{0}` is missing")]
    MissingColumn(String),
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("duplicate column `{0}`")]
    DuplicateColumn(String),
    #[error("not enough samples")]
    NotEnoughSamples,
}
